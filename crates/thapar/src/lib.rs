pub mod cli;
pub mod log;

#[cfg(test)]
mod test_utils;
