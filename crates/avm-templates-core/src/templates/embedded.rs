//! Precompiled reference programs, base64-encoded.
//!
//! Each program was compiled once with sentinel values at the offsets listed by its
//! template module. Integer sentinels are single bytes; address and hash sentinels are
//! 32 bytes wide.
//!
//! ## Warning
//!
//! Do NOT edit these strings without updating the placeholder layout of the template that
//! uses them. A program recompiled with different constants moves every offset after the
//! first change.

// -------------------------------------------------------
// Hash time-locked contract
// -------------------------------------------------------

/// HTLC verifying the preimage with `sha256`.
pub const HTLC_SHA256: &str = "ASAECAEACSYDIOaalh5vLV96yGYHkmVSvpgjXtMzY8qIkYu5yTipFbb5IH+DsWV/8fxTuS3BgUih1l38LUsfo9Z3KErd0gASbZBpIP68oLsUSlpOp7Q4pGgayA5soQW8tgf8VlMlyVaV9qITMQEiDjEQIxIQMQcyAxIQMQgkEhAxCSgSLQEpEhAxCSoSMQIlDRAREA==";

/// HTLC verifying the preimage with `keccak256`. Differs from [`HTLC_SHA256`] in one opcode.
pub const HTLC_KECCAK256: &str = "ASAECAEACSYDIOaalh5vLV96yGYHkmVSvpgjXtMzY8qIkYu5yTipFbb5IH+DsWV/8fxTuS3BgUih1l38LUsfo9Z3KErd0gASbZBpIP68oLsUSlpOp7Q4pGgayA5soQW8tgf8VlMlyVaV9qITMQEiDjEQIxIQMQcyAxIQMQgkEhAxCSgSLQIpEhAxCSoSMQIlDRAREA==";

// -------------------------------------------------------
// Split
// -------------------------------------------------------

pub const SPLIT: &str = "ASAIAQUCAAYHCAkmAyDYHIR7TIW5eM/WAZcXdEDqv7BD+baMN6i2/A5JatGbNCDKsaoZHPQ3Zg8zZB/BZ1oDgt77LGo5np3rbto3/gloTyB40AS2H3I72YCbDk4hKpm7J7NnFy2Xrt39TJG0ORFg+zEQIhIxASMMEDIEJBJAABkxCSgSMQcyAxIQMQglEhAxAiEEDRAiQAAuMwAAMwEAEjEJMgMSEDMABykSEDMBByoSEDMACCEFCzMBCCEGCxIQMwAIIQcPEBA=";

// -------------------------------------------------------
// Dynamic fee
// -------------------------------------------------------

pub const DYNAMIC_FEE: &str = "ASAFAgEFBgcmAyD+vKC7FEpaTqe0OKRoGsgObKEFvLYH/FZTJclWlfaiEyDmmpYeby1feshmB5JlUr6YI17TM2PKiJGLuck4qRW2+SB/g7Flf/H8U7ktwYFIodZd/C1LH6PWdyhK3dIAEm2QaTIEIhIzABAjEhAzAAcxABIQMwAIMQESEDEWIxIQMRAjEhAxBygSEDEJKRIQMQgkEhAxAiUSEDEEIQQSEDEGKhIQ";
