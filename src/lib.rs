//! An NFT series smart contract using the Concordium Token Standard CIS2 events.
//!
//! # Description
//! An instance of this contract is a registry of token *types*. Any address
//! can register a type with its metadata and a fixed number of copies, and
//! becomes the only address allowed to mint tokens of that type. Every mint
//! produces a token numbered after the type, e.g. `dog:1`, `dog:2`, until the
//! copies are exhausted. Minted tokens inherit the type metadata.
//!
//! The contract is deployed empty and has to be initialized once through
//! `new_default_meta` (or `new`), which records the contract owner. Creating
//! a type and minting require an attached deposit covering the storage of the
//! new records; the excess is refunded to the invoker.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, errors::*, events::*, helper::*, state::*, structs::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod errors;
mod events;
mod helper;
mod state;
mod structs;
mod types;
