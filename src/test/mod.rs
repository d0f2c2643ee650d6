pub mod test_util;
mod test_probe;
mod test_effects;
