use uuid::Uuid;

/// Generates a fresh boundary string for a `multipart/form-data` body.
///
/// The boundary is a fixed prefix followed by a random UUID, so it is
/// unlikely to collide with part content. Whether it actually appears
/// inside a field value or file is not validated.
pub fn generate_boundary() -> String {
    format!("Boundary-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_prefixed_and_unique() {
        let a = generate_boundary();
        let b = generate_boundary();
        assert!(a.starts_with("Boundary-"));
        assert_ne!(a, b);
    }
}
