pub mod amazon;
pub mod youtube;
