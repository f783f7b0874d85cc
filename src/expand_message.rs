use crate::*;
use sha2::{Digest, Sha256};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// Longest domain-separation tag accepted by expand_message
pub const MAX_DST_BYTES: usize = 255;

const B_IN_BYTES: usize = 32;
const R_IN_BYTES: usize = 64;
const Z_PAD: [u8; R_IN_BYTES] = [0u8; R_IN_BYTES];

/// Streaming form of the RFC 9380 `expand_message` operation.
///
/// The message may be fed in arbitrary chunks; the output octets are
/// identical to a one-shot call over the concatenation. The
/// domain-separation tag is only needed at finalization, which lets one
/// absorbing state serve transcripts whose tag is chosen late.
pub trait ExpandMessage: Default {
    /// Absorb the next chunk of the message
    fn update(&mut self, data: &[u8]);

    /// Produce `out.len()` octets of output under `dst`.
    ///
    /// Fails if `dst` is longer than [`MAX_DST_BYTES`], if `out` is empty,
    /// or if `out` exceeds the variant maximum (8160 octets for XMD,
    /// 65535 for XOF).
    fn finalize_into(self, dst: &[u8], out: &mut [u8]) -> BbsResult<()>;
}

fn check_lengths(dst: &[u8], out_len: usize, max_out: usize) -> BbsResult<()> {
    if dst.len() > MAX_DST_BYTES {
        return Err(BbsError::InvalidInputs(format!(
            "domain separation tag is {} octets, limit is {}",
            dst.len(),
            MAX_DST_BYTES
        )));
    }
    if out_len == 0 || out_len > max_out {
        return Err(BbsError::InvalidInputs(format!(
            "requested {} output octets, limit is {}",
            out_len, max_out
        )));
    }
    Ok(())
}

/// `expand_message_xmd` over SHA-256, per RFC 9380 §5.4.1
#[derive(Clone)]
pub struct ExpandMsgXmdSha256 {
    // Pre-seeded with Z_pad so updates feed straight into b_0
    hasher: Sha256,
}

impl Default for ExpandMsgXmdSha256 {
    fn default() -> Self {
        Self {
            hasher: Sha256::new_with_prefix(Z_PAD),
        }
    }
}

impl ExpandMessage for ExpandMsgXmdSha256 {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    fn finalize_into(mut self, dst: &[u8], out: &mut [u8]) -> BbsResult<()> {
        check_lengths(dst, out.len(), B_IN_BYTES * 255)?;
        let dst_len = dst.len() as u8;

        // b_0 = H(Z_pad || msg || l_i_b_str || 0x00 || DST_prime)
        Digest::update(&mut self.hasher, (out.len() as u16).to_be_bytes());
        Digest::update(&mut self.hasher, [0u8]);
        Digest::update(&mut self.hasher, dst);
        Digest::update(&mut self.hasher, [dst_len]);
        let b_0: [u8; B_IN_BYTES] = self.hasher.finalize().into();

        // b_i = H((b_0 ^ b_(i-1)) || I2OSP(i, 1) || DST_prime), b_1 omits the xor
        let mut b_i = [0u8; B_IN_BYTES];
        for (i, chunk) in out.chunks_mut(B_IN_BYTES).enumerate() {
            let mut hasher = Sha256::new();
            if i == 0 {
                Digest::update(&mut hasher, b_0);
            } else {
                let mut mixed = b_0;
                for (m, b) in mixed.iter_mut().zip(b_i.iter()) {
                    *m ^= *b;
                }
                Digest::update(&mut hasher, mixed);
            }
            Digest::update(&mut hasher, [(i + 1) as u8]);
            Digest::update(&mut hasher, dst);
            Digest::update(&mut hasher, [dst_len]);
            b_i = hasher.finalize().into();
            chunk.copy_from_slice(&b_i[..chunk.len()]);
        }
        Ok(())
    }
}

/// `expand_message_xof` over SHAKE-256, per RFC 9380 §5.4.2
#[derive(Clone, Default)]
pub struct ExpandMsgXofShake256 {
    state: Shake256,
}

impl ExpandMessage for ExpandMsgXofShake256 {
    fn update(&mut self, data: &[u8]) {
        Update::update(&mut self.state, data);
    }

    fn finalize_into(mut self, dst: &[u8], out: &mut [u8]) -> BbsResult<()> {
        check_lengths(dst, out.len(), u16::MAX as usize)?;

        // absorb(msg || I2OSP(len_in_bytes, 2) || DST || I2OSP(|DST|, 1))
        Update::update(&mut self.state, &(out.len() as u16).to_be_bytes());
        Update::update(&mut self.state, dst);
        Update::update(&mut self.state, &[dst.len() as u8]);
        self.state.finalize_xof().read(out);
        Ok(())
    }
}
