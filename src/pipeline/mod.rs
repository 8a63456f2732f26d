pub(crate) mod step;
pub(crate) mod tracker;
