pub mod errors;
pub mod db;
pub mod event;

#[cfg(test)]
mod tests;
