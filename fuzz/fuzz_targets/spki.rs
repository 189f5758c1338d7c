#![no_main]
// Arbitrary DER must decode to a key or an error, never a panic.
use keyinfo::{KeyInfo, PublicKeyMaterial};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(key) = PublicKeyMaterial::from_spki_der(data) else {
        return;
    };

    let info = key.info();
    assert_eq!(info.bits(), key.bits());

    if let (PublicKeyMaterial::Ec(ec), KeyInfo::Ec { name, point, .. }) = (&key, &info) {
        assert_eq!(ec.name(), name);
        assert_eq!(ec.point(), point);
    }
});
