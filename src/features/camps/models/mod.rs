mod camp;

pub use camp::Camp;
