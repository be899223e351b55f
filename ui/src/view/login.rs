use std::borrow::Cow;

use another_html_builder::Buffer;

use super::Binding;

#[derive(Debug)]
pub struct View<'a> {
    binding: Binding<'a>,
    authorize_url: Cow<'a, str>,
}

impl<'a> View<'a> {
    pub fn new(binding: Binding<'a>, authorize_url: impl Into<Cow<'a, str>>) -> Self {
        Self {
            binding,
            authorize_url: authorize_url.into(),
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
                let buf = crate::component::head::render(buf, "Login");
                buf.node("body").content(|buf| {
                    buf.node("main")
                        .attr(("data-view", self.binding.template))
                        .attr(("data-controller", self.binding.controller))
                        .content(|buf| {
                            buf.node("h1")
                                .content(|buf| buf.text("Login"))
                                .node("a")
                                .attr(("class", "button"))
                                .attr(("href", self.authorize_url.as_ref()))
                                .content(|buf| buf.text("Sign in"))
                                .node("a")
                                .attr(("href", "/public"))
                                .content(|buf| buf.text("Continue without signing in"))
                        })
                })
            })
            .into_inner()
    }
}
