use another_html_builder::Buffer;

use super::Binding;

const NAVIGATION: crate::component::nav::Component = crate::component::nav::Component {
    links: &[("Home", "/"), ("Login", "/login")],
};

#[derive(Debug)]
pub struct View<'a> {
    binding: Binding<'a>,
}

impl<'a> View<'a> {
    pub fn new(binding: Binding<'a>) -> Self {
        Self { binding }
    }
}

impl super::View for View<'_> {
    fn render(self) -> String {
        Buffer::default()
            .doctype()
            .node("html")
            .attr(("lang", "en"))
            .content(|buf| {
                let buf = crate::component::head::render(buf, "Public");
                buf.node("body").content(|buf| {
                    buf.node("main")
                        .attr(("data-view", self.binding.template))
                        .attr(("data-controller", self.binding.controller))
                        .content(|buf| {
                            let buf = NAVIGATION.render(buf);
                            buf.node("h1")
                                .content(|buf| buf.text("Public"))
                                .node("p")
                                .content(|buf| buf.text("This page is available without signing in."))
                        })
                })
            })
            .into_inner()
    }
}
