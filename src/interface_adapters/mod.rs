pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
