pub(crate) mod content;
pub(crate) mod presets;
pub(crate) mod zone;
