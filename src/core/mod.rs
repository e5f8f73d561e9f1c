pub mod phrase_bank;
pub mod pipeline;
pub mod seed;
pub mod selector;
