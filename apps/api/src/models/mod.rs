pub mod answers;

#[cfg(test)]
pub mod fixtures;
