use crate::IdGenerator;
use microurl_core::{GeneratorError, UrlId};
use typed_builder::TypedBuilder;

/// Width of the obfuscated identifier space, in bits.
pub const ID_BITS: u32 = 40;

const LOWER_40_BITS_MASK: u64 = (1_u64 << ID_BITS) - 1;

/// A multiplicative and XOR-based permutation of the 40-bit identifier space.
///
/// Multiplying by an odd number is invertible modulo 2^40 and so is XOR with
/// a fixed mask, so distinct inputs always map to distinct outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct Obfuscator {
    #[builder(default = 3)]
    prime: u64,
    #[builder(default = 0xDEAD_BEEF_CAFE_BABE)]
    mask: u64,
}

impl Default for Obfuscator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Obfuscator {
    pub fn prime(&self) -> u64 {
        self.prime
    }

    pub fn mask(&self) -> u64 {
        self.mask
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.prime % 2 == 0 {
            return Err(GeneratorError::InvalidSettings(format!(
                "obfuscator multiplier must be odd, got {}",
                self.prime
            )));
        }
        Ok(())
    }

    /// Maps an identifier below 2^40 to its obfuscated counterpart.
    pub fn obfuscate(&self, id: UrlId) -> Result<UrlId, GeneratorError> {
        let source = id.get();
        if source > LOWER_40_BITS_MASK {
            return Err(GeneratorError::OutOfRange {
                id,
                max: LOWER_40_BITS_MASK,
            });
        }

        let obfuscated = (source.wrapping_mul(self.prime) ^ self.mask) & LOWER_40_BITS_MASK;
        Ok(UrlId::new(obfuscated))
    }

    /// Inverts [`Obfuscator::obfuscate`].
    pub fn reveal(&self, id: UrlId) -> UrlId {
        let unmasked = (id.get() ^ self.mask) & LOWER_40_BITS_MASK;
        UrlId::new(unmasked.wrapping_mul(self.inverse()) & LOWER_40_BITS_MASK)
    }

    /// Multiplicative inverse of `prime` modulo 2^64 (and so modulo 2^40).
    fn inverse(&self) -> u64 {
        // Newton's iteration doubles the number of correct low bits each step.
        let mut inv = self.prime;
        for _ in 0..6 {
            inv = inv.wrapping_mul(2_u64.wrapping_sub(self.prime.wrapping_mul(inv)));
        }
        inv
    }
}

/// Decorates another generator so consecutive identifiers produce
/// non-sequential secrets.
#[derive(Debug, Clone)]
pub struct ObfuscatedGenerator<G> {
    inner: G,
    obfuscator: Obfuscator,
}

impl<G: IdGenerator> ObfuscatedGenerator<G> {
    /// Fails if the obfuscator's multiplier is even.
    pub fn new(inner: G, obfuscator: Obfuscator) -> Result<Self, GeneratorError> {
        obfuscator.validate()?;
        Ok(Self { inner, obfuscator })
    }

    pub fn obfuscator(&self) -> &Obfuscator {
        &self.obfuscator
    }
}

impl<G: IdGenerator> IdGenerator for ObfuscatedGenerator<G> {
    fn generate(&self, url: &str) -> Result<UrlId, GeneratorError> {
        let id = self.inner.generate(url)?;
        self.obfuscator.obfuscate(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeqGenerator;
    use proptest::prelude::*;

    #[test]
    fn obfuscate_applies_multiplication_xor_in_u40_space() {
        let obfuscator = Obfuscator::builder().build();
        let id = UrlId::new(0xA5_1234_5678);

        let obfuscated = obfuscator.obfuscate(id).unwrap();

        let expected =
            (id.get().wrapping_mul(obfuscator.prime()) ^ obfuscator.mask()) & LOWER_40_BITS_MASK;
        assert_eq!(obfuscated, UrlId::new(expected));
    }

    #[test]
    fn rejects_ids_outside_40_bits() {
        let obfuscator = Obfuscator::default();
        let id = UrlId::new(1 << ID_BITS);

        assert_eq!(
            obfuscator.obfuscate(id),
            Err(GeneratorError::OutOfRange {
                id,
                max: LOWER_40_BITS_MASK
            })
        );
    }

    #[test]
    fn even_multiplier_is_rejected() {
        let obfuscator = Obfuscator::builder().prime(4).build();
        let err = ObfuscatedGenerator::new(SeqGenerator::new(), obfuscator).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidSettings(_)));
    }

    #[test]
    fn consecutive_ids_are_not_consecutive() {
        let generator = ObfuscatedGenerator::new(SeqGenerator::new(), Obfuscator::default()).unwrap();

        let first = generator.generate("x").unwrap();
        let second = generator.generate("x").unwrap();

        assert_ne!(first, second);
        assert_ne!(second.get(), first.get() + 1);
        assert_eq!(generator.obfuscator().reveal(first), UrlId::new(0));
        assert_eq!(generator.obfuscator().reveal(second), UrlId::new(1));
    }

    #[test]
    fn inner_failure_propagates() {
        let generator = ObfuscatedGenerator::new(
            SeqGenerator::with_offset(u64::MAX),
            Obfuscator::default(),
        )
        .unwrap();

        assert!(matches!(
            generator.generate("x"),
            Err(GeneratorError::Exhausted { last: None })
        ));
    }

    proptest! {
        #[test]
        fn reveal_inverts_obfuscate(
            id in 0..=LOWER_40_BITS_MASK,
            prime in any::<u64>(),
            mask in any::<u64>(),
        ) {
            let obfuscator = Obfuscator::builder().prime(prime | 1).mask(mask).build();
            let obfuscated = obfuscator.obfuscate(UrlId::new(id)).unwrap();
            prop_assert!(obfuscated.get() <= LOWER_40_BITS_MASK);
            prop_assert_eq!(obfuscator.reveal(obfuscated), UrlId::new(id));
        }
    }
}
