//! Process-wide table of named curves.

use crate::{DomainParameters, Error, Result, table::CURVES};
use der::asn1::ObjectIdentifier;
use std::{borrow::Cow, collections::HashMap, sync::LazyLock};
use weierstrass::{AffinePoint, BigUint, BinaryCurve, BinaryField, Curve, PrimeCurve};

/// Registry built on first use and never mutated afterwards.
static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::load);

/// Alternative names used by ANSI X9.62 and FIPS 186.
const ALIASES: &[(&str, &str)] = &[
    ("prime192v1", "secp192r1"),
    ("prime256v1", "secp256r1"),
    ("P-192", "secp192r1"),
    ("P-224", "secp224r1"),
    ("P-256", "secp256r1"),
    ("P-384", "secp384r1"),
    ("P-521", "secp521r1"),
    ("K-163", "sect163k1"),
    ("B-163", "sect163r2"),
    ("K-233", "sect233k1"),
    ("B-233", "sect233r1"),
    ("K-283", "sect283k1"),
    ("B-283", "sect283r1"),
    ("K-409", "sect409k1"),
    ("B-409", "sect409r1"),
    ("K-571", "sect571k1"),
    ("B-571", "sect571r1"),
];

/// Field of a table entry.
pub(crate) enum FieldDef {
    /// Prime field modulus `p`, big endian.
    Prime(&'static [u8]),

    /// Binary field degree `m` and the lower exponents of its reduction
    /// polynomial.
    Binary(u32, &'static [u32]),
}

/// Table entry as written down in the standard.
pub(crate) struct CurveRow {
    pub(crate) name: &'static str,
    pub(crate) oid: ObjectIdentifier,
    pub(crate) field: FieldDef,
    pub(crate) a: &'static [u8],
    pub(crate) b: &'static [u8],
    pub(crate) generator: &'static [u8],
    pub(crate) order: &'static [u8],
    pub(crate) cofactor: u32,
    pub(crate) strength: usize,
    pub(crate) point_size: Option<usize>,
}

impl CurveRow {
    /// Build the domain parameters of this entry.
    ///
    /// # Panics
    ///
    /// Panics if the entry has neither a point size nor a prime modulus to
    /// derive it from.
    fn load(&self) -> DomainParameters {
        let a = BigUint::from_bytes_be(self.a);
        let b = BigUint::from_bytes_be(self.b);

        let (curve, derived_size) = match self.field {
            FieldDef::Prime(p) => {
                let p = BigUint::from_bytes_be(p);
                let size = ntheory::byte_length(&p);
                (Curve::Prime(PrimeCurve::new(p, a, b)), Some(size))
            }
            FieldDef::Binary(m, lower) => {
                let field = BinaryField::new(m, lower);
                (Curve::Binary(BinaryCurve::new(field, a, b)), None)
            }
        };

        let Some(point_size) = self.point_size.or(derived_size) else {
            panic!("named curve {} has no point_size or p", self.name);
        };

        DomainParameters {
            name: Cow::Borrowed(self.name),
            oid: Some(self.oid),
            curve,
            generator: self.generator.to_vec(),
            order: BigUint::from_bytes_be(self.order),
            cofactor: BigUint::from(self.cofactor),
            strength: self.strength,
            point_size,
        }
    }
}

struct Registry {
    curves: Vec<DomainParameters>,
    by_name: HashMap<&'static str, usize>,
    by_oid: HashMap<ObjectIdentifier, usize>,
}

impl Registry {
    fn load() -> Self {
        let curves: Vec<_> = CURVES.iter().map(CurveRow::load).collect();

        let mut by_name = HashMap::with_capacity(CURVES.len() + ALIASES.len());
        let mut by_oid = HashMap::with_capacity(CURVES.len());

        for (index, row) in CURVES.iter().enumerate() {
            by_name.insert(row.name, index);
            by_oid.insert(row.oid, index);
        }

        for &(alias, name) in ALIASES {
            if let Some(&index) = by_name.get(name) {
                by_name.insert(alias, index);
            }
        }

        log::debug!("loaded {} named curves", curves.len());
        Self {
            curves,
            by_name,
            by_oid,
        }
    }
}

/// Look up a curve by name (`secp256r1`, `prime256v1`, `P-256`) or by the
/// dotted form of its object identifier (`1.2.840.10045.3.1.7`).
pub fn lookup(name_or_oid: &str) -> Result<&'static DomainParameters> {
    let registry = &*REGISTRY;

    if let Some(&index) = registry.by_name.get(name_or_oid) {
        return Ok(&registry.curves[index]);
    }

    match ObjectIdentifier::new(name_or_oid) {
        Ok(oid) => lookup_oid(&oid),
        Err(_) => Err(Error::UnknownCurve(name_or_oid.to_owned())),
    }
}

/// Look up a curve by object identifier.
pub fn lookup_oid(oid: &ObjectIdentifier) -> Result<&'static DomainParameters> {
    let registry = &*REGISTRY;

    registry
        .by_oid
        .get(oid)
        .map(|&index| &registry.curves[index])
        .ok_or_else(|| Error::UnknownCurve(oid.to_string()))
}

/// Canonical name of a curve OID, or the OID in dotted form when no curve is
/// registered for it.
pub fn friendly_name(oid: &ObjectIdentifier) -> String {
    match lookup_oid(oid) {
        Ok(params) => params.name().to_owned(),
        Err(_) => oid.to_string(),
    }
}

/// Find the named curve with the given equation and base point.
///
/// Used to recognize explicitly encoded parameters of a standard curve.
pub fn find_matching(curve: &Curve, generator: &AffinePoint) -> Option<&'static DomainParameters> {
    let found = iter().find(|params| {
        params.curve() == curve && params.generator_point().ok().as_ref() == Some(generator)
    });

    if let Some(params) = found {
        log::trace!("explicit parameters match {}", params.name());
    }

    found
}

/// All registered curves in table order.
pub fn iter() -> impl Iterator<Item = &'static DomainParameters> {
    REGISTRY.curves.iter()
}
