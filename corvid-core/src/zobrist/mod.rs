mod zobrist_utils;

pub use zobrist_utils::{init_zobrist_keys, get_key_white_turn,
    get_key_castling, get_key_ep_square, get_key_for_piece};
