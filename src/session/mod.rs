//! Client-held game sessions
//!
//! The state of a game never lives on the server. It is sealed into a token
//! by [`SessionCodec`], handed to the client, and opened again on the next
//! request. The only server-side secret is the key from [`KeyStore`].

mod codec;
mod key;
mod state;

pub use codec::{DELIMITER, SCHEMA_VERSION, SessionCodec};
pub use key::{KEY_LEN, KeyStore, SessionKey};
pub use state::{Ending, GameState, Phase};
