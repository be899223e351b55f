use std::borrow::Cow;

use another_html_builder::Buffer;

use super::Binding;

#[derive(Debug)]
pub struct View<'a> {
    binding: Binding<'a>,
    logout_url: Cow<'a, str>,
}

impl<'a> View<'a> {
    pub fn new(binding: Binding<'a>, logout_url: impl Into<Cow<'a, str>>) -> Self {
        Self {
            binding,
            logout_url: logout_url.into(),
        }
    }
}

impl super::View for View<'_> {
    fn render(self) -> String {
        Buffer::default()
            .doctype()
            .node("html")
            .attr(("lang", "en"))
            .content(|buf| {
                let buf = crate::component::head::render(buf, "Logout");
                buf.node("body").content(|buf| {
                    buf.node("main")
                        .attr(("data-view", self.binding.template))
                        .attr(("data-controller", self.binding.controller))
                        .content(|buf| {
                            buf.node("h1")
                                .content(|buf| buf.text("Logout"))
                                .node("a")
                                .attr(("class", "button"))
                                .attr(("href", self.logout_url.as_ref()))
                                .content(|buf| buf.text("Sign out"))
                                .node("a")
                                .attr(("href", "/"))
                                .content(|buf| buf.text("Back to home"))
                        })
                })
            })
            .into_inner()
    }
}
