pub mod account_identifier;
pub mod icrc_tokens;
pub mod sns_neuron;
pub mod token;
pub mod version;
