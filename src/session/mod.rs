pub(crate) mod studio;
pub(crate) mod workflow;
