pub mod impl_image;
#[cfg(test)]
pub mod impl_fake;
pub mod interface;
