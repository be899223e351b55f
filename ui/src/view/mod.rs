pub mod error;
pub mod login;
pub mod logout;
pub mod public;
pub mod root;

pub trait View {
    fn render(self) -> String;
}

/// Identifies which view template and which controller produced a page.
///
/// Both values end up as `data-view` and `data-controller` attributes on the
/// `main` element of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    pub template: &'a str,
    pub controller: &'a str,
}

impl<'a> Binding<'a> {
    pub const fn new(template: &'a str, controller: &'a str) -> Self {
        Self {
            template,
            controller,
        }
    }
}
