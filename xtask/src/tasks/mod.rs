pub mod ci;
pub mod dist;
pub mod test;
