pub mod rrc;
