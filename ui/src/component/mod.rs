pub(crate) mod head;
pub(crate) mod nav;
