pub mod card;
pub mod qr;
pub mod serve;
pub mod visit;
