pub mod order;
#[cfg(test)]
mod tests;
pub mod validator;
