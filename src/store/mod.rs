pub(crate) mod zones;
