use std::borrow::Cow;

use another_html_builder::Buffer;

#[derive(Debug)]
pub struct View {
    message: Cow<'static, str>,
}

impl View {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl super::View for View {
    fn render(self) -> String {
        Buffer::default()
            .doctype()
            .node("html")
            .attr(("lang", "en"))
            .content(|buf| {
                let buf = crate::component::head::render(buf, "Error");
                buf.node("body").content(|buf| {
                    buf.node("div")
                        .attr(("class", "card"))
                        .content(|buf| {
                            buf.node("div")
                                .attr(("class", "card-header"))
                                .content(|buf| buf.text("Error"))
                                .node("div")
                                .attr(("class", "card-body"))
                                .content(|buf| buf.text(self.message.as_ref()))
                        })
                })
            })
            .into_inner()
    }
}
