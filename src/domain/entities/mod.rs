pub mod journal_entry;
pub mod trade;

#[cfg(test)]
pub(crate) mod fixtures;
