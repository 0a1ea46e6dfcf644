use subtle::ConstantTimeEq;

/// Compare two byte slices without short-circuiting on the first
/// differing byte. Length mismatch returns early; lengths are not
/// secret here, only the digest contents are.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
