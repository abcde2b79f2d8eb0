pub mod biphase;
pub mod oqpsk;
