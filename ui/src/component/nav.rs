use another_html_builder::{Body, Buffer};

/// Navigation bar, made of `(label, href)` pairs.
pub(crate) struct Component {
    pub links: &'static [(&'static str, &'static str)],
}

impl Component {
    pub(crate) fn render<'a, W: std::fmt::Write>(
        &self,
        buf: Buffer<W, Body<'a>>,
    ) -> Buffer<W, Body<'a>> {
        buf.node("nav").content(|buf| {
            self.links.iter().fold(buf, |buf, (label, href)| {
                buf.node("a")
                    .attr(("class", "nav-item"))
                    .attr(("href", *href))
                    .content(|buf| buf.text(label))
            })
        })
    }
}
