//! Test vectors, mostly from RFC 8613 Appendix C.1, the rest computed with
//! an independent implementation.

// Pairwise, RFC 8613 C.1.1 --------------------------------------------------

pub const MASTER_SECRET: [u8; 16] = [
    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
    0x0C, 0x0D, 0x0E, 0x0F, 0x10,
];
pub const MASTER_SALT: [u8; 8] = [
    0x9E, 0x7C, 0xA9, 0x22, 0x23, 0x78, 0x63, 0x40,
];
pub const SENDER_ID: [u8; 0] = [];
pub const RECIPIENT_ID: [u8; 1] = [0x01];
pub const INFO_SENDER_KEY: [u8; 9] = [
    0x85, 0x40, 0xF6, 0x0A, 0x63, 0x4B, 0x65, 0x79, 0x10,
];
pub const INFO_RECIPIENT_KEY: [u8; 10] = [
    0x85, 0x41, 0x01, 0xF6, 0x0A, 0x63, 0x4B, 0x65, 0x79, 0x10,
];
pub const INFO_COMMON_IV: [u8; 8] = [
    0x85, 0x40, 0xF6, 0x0A, 0x62, 0x49, 0x56, 0x0D,
];
pub const SENDER_KEY: [u8; 16] = [
    0xF0, 0x91, 0x0E, 0xD7, 0x29, 0x5E, 0x6A, 0xD4, 0xB5, 0x4F, 0xC7,
    0x93, 0x15, 0x43, 0x02, 0xFF,
];
pub const SENDER_IV: [u8; 13] = [
    0x46, 0x22, 0xD4, 0xDD, 0x6D, 0x94, 0x41, 0x68, 0xEE, 0xFB, 0x54,
    0x98, 0x7C,
];
pub const RECIPIENT_KEY: [u8; 16] = [
    0xFF, 0xB1, 0x4E, 0x09, 0x3C, 0x94, 0xC9, 0xCA, 0xC9, 0x47, 0x16,
    0x48, 0xB4, 0xF9, 0x87, 0x10,
];
pub const RECIPIENT_IV: [u8; 13] = [
    0x47, 0x22, 0xD4, 0xDD, 0x6D, 0x94, 0x41, 0x69, 0xEE, 0xFB, 0x54,
    0x98, 0x7C,
];

// Recipient 0x01 with other parameters -------------------------------------

pub const NO_SALT_KEY: [u8; 16] = [
    0xE5, 0x7B, 0x56, 0x35, 0x81, 0x51, 0x77, 0xCD, 0x67, 0x9A, 0xB4,
    0xBC, 0xEC, 0x9D, 0x7D, 0xDA,
];
pub const NO_SALT_IV: [u8; 13] = [
    0xBF, 0x35, 0xAE, 0x29, 0x7D, 0x2D, 0xAC, 0xE8, 0x10, 0xC5, 0x2E,
    0x99, 0xF9,
];
pub const GCM_KEY: [u8; 16] = [
    0xA5, 0x79, 0x18, 0xB1, 0xB1, 0xE1, 0x53, 0x32, 0x5C, 0x26, 0x96,
    0xF9, 0xFE, 0x26, 0xFA, 0x14,
];
pub const GCM_IV: [u8; 12] = [
    0x19, 0xE1, 0x02, 0x04, 0x11, 0x55, 0x71, 0x6C, 0x19, 0x9C, 0x56,
    0x1A,
];
pub const SHA512_KEY: [u8; 16] = [
    0xBB, 0xAF, 0x9D, 0xE7, 0xB4, 0x37, 0xDD, 0x18, 0x00, 0xD9, 0x23,
    0xBB, 0x1C, 0x02, 0x62, 0xA7,
];
pub const SHA512_IV: [u8; 13] = [
    0x60, 0xBB, 0x6F, 0x71, 0x45, 0xBE, 0xE3, 0xEF, 0xE8, 0xCE, 0xC8,
    0x1D, 0x12,
];

// Group ---------------------------------------------------------------------

pub const GROUP_ID: [u8; 8] = [0x37, 0xCB, 0xF3, 0x21, 0x00, 0x17, 0xA2, 0xD3];
pub const INFO_GROUP_KEY_1: [u8; 18] = [
    0x85, 0x41, 0x25, 0x48, 0x37, 0xCB, 0xF3, 0x21, 0x00, 0x17, 0xA2,
    0xD3, 0x0A, 0x63, 0x4B, 0x65, 0x79, 0x10,
];
pub const GROUP_MEMBER_1: [u8; 1] = [0x25];
pub const GROUP_KEY_1: [u8; 16] = [
    0xA7, 0x99, 0x68, 0xCB, 0xA9, 0x7D, 0xE8, 0x9F, 0xA7, 0x47, 0x07,
    0x01, 0xC9, 0x0E, 0x85, 0x54,
];
pub const GROUP_IV_1: [u8; 13] = [
    0x2D, 0xA5, 0x8F, 0xB8, 0x5F, 0xF1, 0xB8, 0x39, 0x0B, 0x71, 0x81,
    0xB8, 0x5E,
];
pub const GROUP_MEMBER_2: [u8; 1] = [0x52];
pub const GROUP_KEY_2: [u8; 16] = [
    0x83, 0x7C, 0x48, 0x5B, 0x05, 0x44, 0x75, 0xD2, 0xE0, 0x87, 0x48,
    0x91, 0x3B, 0x00, 0x4D, 0xF4,
];
pub const GROUP_IV_2: [u8; 13] = [
    0x2D, 0xA5, 0x8F, 0xB8, 0x5F, 0xF1, 0xB8, 0x4E, 0x0B, 0x71, 0x81,
    0xB8, 0x5E,
];
pub const GROUP_MEMBER_3: [u8; 1] = [0x77];
pub const GROUP_KEY_3: [u8; 16] = [
    0xC8, 0x96, 0x2C, 0x02, 0x7E, 0xED, 0x5E, 0x0F, 0x22, 0x08, 0x68,
    0xA1, 0x45, 0x3E, 0x7F, 0x29,
];
pub const GROUP_IV_3: [u8; 13] = [
    0x2D, 0xA5, 0x8F, 0xB8, 0x5F, 0xF1, 0xB8, 0x6B, 0x0B, 0x71, 0x81,
    0xB8, 0x5E,
];

// Ed25519 ------------------------------------------------------------------

pub const AUTH_PRIVATE: [u8; 32] = [
    0x53, 0x21, 0xFC, 0x01, 0xC2, 0x98, 0x20, 0x06, 0x3A, 0x72, 0x50,
    0x8F, 0xC6, 0x39, 0x25, 0x1D, 0xC8, 0x30, 0xE2, 0xF7, 0x68, 0x3E,
    0xB8, 0xE3, 0x8A, 0xF1, 0x64, 0xA5, 0xB9, 0xAF, 0x9B, 0xE3,
];
pub const AUTH_PUBLIC: [u8; 32] = [
    0x42, 0x4C, 0x75, 0x6A, 0xB7, 0x7C, 0xC6, 0xFD, 0xEC, 0xF0, 0xB3,
    0xEC, 0xFC, 0xFF, 0xB7, 0x53, 0x10, 0xC0, 0x15, 0xBF, 0x5C, 0xBA,
    0x2E, 0xC0, 0xA2, 0x36, 0xE6, 0x65, 0x0C, 0x8A, 0xB9, 0xC7,
];
