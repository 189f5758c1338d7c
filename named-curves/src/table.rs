//! Domain parameters of the SEC 2 recommended curves.

use crate::registry::{CurveRow, FieldDef};
use der::asn1::ObjectIdentifier;
use hex_literal::hex;

/// SEC 2 prime field and binary field curves, in registry order.
pub(crate) static CURVES: &[CurveRow] = &[
    CurveRow {
        name: "secp112r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.6"),
        field: FieldDef::Prime(&hex!("db7c2abf62e35e668076bead208b")),
        a: &hex!("db7c2abf62e35e668076bead2088"),
        b: &hex!("659ef8ba043916eede8911702b22"),
        generator: &hex!(
            "04"
            "09487239995a5ee76b55f9c2f098"
            "a89ce5af8724c0a23e0e0ff77500"
        ),
        order: &hex!("db7c2abf62e35e7628dfac6561c5"),
        cofactor: 1,
        strength: 56,
        point_size: None,
    },
    CurveRow {
        name: "secp112r2",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.7"),
        field: FieldDef::Prime(&hex!("db7c2abf62e35e668076bead208b")),
        a: &hex!("6127c24c05f38a0aaaf65c0ef02c"),
        b: &hex!("51def1815db5ed74fcc34c85d709"),
        generator: &hex!(
            "04"
            "4ba30ab5e892b4e1649dd0928643"
            "adcd46f5882e3747def36e956e97"
        ),
        order: &hex!("36df0aafd8b8d7597ca10520d04b"),
        cofactor: 4,
        strength: 56,
        point_size: None,
    },
    CurveRow {
        name: "secp128r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.28"),
        field: FieldDef::Prime(&hex!("fffffffdffffffffffffffffffffffff")),
        a: &hex!("fffffffdfffffffffffffffffffffffc"),
        b: &hex!("e87579c11079f43dd824993c2cee5ed3"),
        generator: &hex!(
            "04"
            "161ff7528b899b2d0c28607ca52c5b86"
            "cf5ac8395bafeb13c02da292dded7a83"
        ),
        order: &hex!("fffffffe0000000075a30d1b9038a115"),
        cofactor: 1,
        strength: 64,
        point_size: None,
    },
    CurveRow {
        name: "secp128r2",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.29"),
        field: FieldDef::Prime(&hex!("fffffffdffffffffffffffffffffffff")),
        a: &hex!("d6031998d1b3bbfebf59cc9bbff9aee1"),
        b: &hex!("5eeefca380d02919dc2c6558bb6d8a5d"),
        generator: &hex!(
            "04"
            "7b6aa5d85e572983e6fb32a7cdebc140"
            "27b6916a894d3aee7106fe805fc34b44"
        ),
        order: &hex!("3fffffff7fffffffbe0024720613b5a3"),
        cofactor: 4,
        strength: 64,
        point_size: None,
    },
    CurveRow {
        name: "secp160k1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.9"),
        field: FieldDef::Prime(&hex!("fffffffffffffffffffffffffffffffeffffac73")),
        a: &hex!("0000000000000000000000000000000000000000"),
        b: &hex!("0000000000000000000000000000000000000007"),
        generator: &hex!(
            "04"
            "3b4c382ce37aa192a4019e763036f4f5dd4d7ebb"
            "938cf935318fdced6bc28286531733c3f03c4fee"
        ),
        order: &hex!("0100000000000000000001b8fa16dfab9aca16b6b3"),
        cofactor: 1,
        strength: 80,
        point_size: None,
    },
    CurveRow {
        name: "secp160r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.8"),
        field: FieldDef::Prime(&hex!("ffffffffffffffffffffffffffffffff7fffffff")),
        a: &hex!("ffffffffffffffffffffffffffffffff7ffffffc"),
        b: &hex!("1c97befc54bd7a8b65acf89f81d4d4adc565fa45"),
        generator: &hex!(
            "04"
            "4a96b5688ef573284664698968c38bb913cbfc82"
            "23a628553168947d59dcc912042351377ac5fb32"
        ),
        order: &hex!("0100000000000000000001f4c8f927aed3ca752257"),
        cofactor: 1,
        strength: 80,
        point_size: None,
    },
    CurveRow {
        name: "secp160r2",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.30"),
        field: FieldDef::Prime(&hex!("fffffffffffffffffffffffffffffffeffffac73")),
        a: &hex!("fffffffffffffffffffffffffffffffeffffac70"),
        b: &hex!("b4e134d3fb59eb8bab57274904664d5af50388ba"),
        generator: &hex!(
            "04"
            "52dcb034293a117e1f4ff11b30f7199d3144ce6d"
            "feaffef2e331f296e071fa0df9982cfea7d43f2e"
        ),
        order: &hex!("0100000000000000000000351ee786a818f3a1a16b"),
        cofactor: 1,
        strength: 80,
        point_size: None,
    },
    CurveRow {
        name: "secp192k1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.31"),
        field: FieldDef::Prime(&hex!("fffffffffffffffffffffffffffffffffffffffeffffee37")),
        a: &hex!("000000000000000000000000000000000000000000000000"),
        b: &hex!("000000000000000000000000000000000000000000000003"),
        generator: &hex!(
            "04"
            "db4ff10ec057e9ae26b07d0280b7f4341da5d1b1eae06c7d"
            "9b2f2f6d9c5628a7844163d015be86344082aa88d95e2f9d"
        ),
        order: &hex!("fffffffffffffffffffffffe26f2fc170f69466a74defd8d"),
        cofactor: 1,
        strength: 96,
        point_size: None,
    },
    CurveRow {
        name: "secp192r1",
        oid: ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.1"),
        field: FieldDef::Prime(&hex!("fffffffffffffffffffffffffffffffeffffffffffffffff")),
        a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffc"),
        b: &hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
        generator: &hex!(
            "04"
            "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"
            "07192b95ffc8da78631011ed6b24cdd573f977a11e794811"
        ),
        order: &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
        cofactor: 1,
        strength: 96,
        point_size: None,
    },
    CurveRow {
        name: "secp224k1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.32"),
        field: FieldDef::Prime(&hex!("fffffffffffffffffffffffffffffffffffffffffffffffeffffe56d")),
        a: &hex!("00000000000000000000000000000000000000000000000000000000"),
        b: &hex!("00000000000000000000000000000000000000000000000000000005"),
        generator: &hex!(
            "04"
            "a1455b334df099df30fc28a169a467e9e47075a90f7e650eb6b7a45c"
            "7e089fed7fba344282cafbd6f7e319f7c0b0bd59e2ca4bdb556d61a5"
        ),
        order: &hex!("010000000000000000000000000001dce8d2ec6184caf0a971769fb1f7"),
        cofactor: 1,
        strength: 112,
        point_size: None,
    },
    CurveRow {
        name: "secp224r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.33"),
        field: FieldDef::Prime(&hex!("ffffffffffffffffffffffffffffffff000000000000000000000001")),
        a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
        b: &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
        generator: &hex!(
            "04"
            "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"
            "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"
        ),
        order: &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
        cofactor: 1,
        strength: 112,
        point_size: None,
    },
    CurveRow {
        name: "secp256k1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.10"),
        field: FieldDef::Prime(&hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f")),
        a: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        b: &hex!("0000000000000000000000000000000000000000000000000000000000000007"),
        generator: &hex!(
            "04"
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        ),
        order: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
        cofactor: 1,
        strength: 128,
        point_size: None,
    },
    CurveRow {
        name: "secp256r1",
        oid: ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7"),
        field: FieldDef::Prime(&hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff")),
        a: &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
        b: &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        generator: &hex!(
            "04"
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
        ),
        order: &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        cofactor: 1,
        strength: 128,
        point_size: None,
    },
    CurveRow {
        name: "secp384r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.34"),
        field: FieldDef::Prime(&hex!(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
            "ffffffff0000000000000000ffffffff"
        )),
        a: &hex!(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
            "ffffffff0000000000000000fffffffc"
        ),
        b: &hex!(
            "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a"
            "c656398d8a2ed19d2a85c8edd3ec2aef"
        ),
        generator: &hex!(
            "04"
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
            "5502f25dbf55296c3a545e3872760ab7"
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0"
            "0a60b1ce1d7e819d7a431d7c90ea0e5f"
        ),
        order: &hex!(
            "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
            "581a0db248b0a77aecec196accc52973"
        ),
        cofactor: 1,
        strength: 192,
        point_size: None,
    },
    CurveRow {
        name: "secp521r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.35"),
        field: FieldDef::Prime(&hex!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "ffff"
        )),
        a: &hex!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "fffc"
        ),
        b: &hex!(
            "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1"
            "09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50"
            "3f00"
        ),
        generator: &hex!(
            "04"
            "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d"
            "3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5"
            "bd66"
            "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e"
            "662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1"
            "6650"
        ),
        order: &hex!(
            "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138"
            "6409"
        ),
        cofactor: 1,
        strength: 256,
        point_size: None,
    },
    CurveRow {
        name: "sect113r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.4"),
        field: FieldDef::Binary(113, &[9, 0]),
        a: &hex!("003088250ca6e7c7fe649ce85820f7"),
        b: &hex!("00e8bee4d3e2260744188be0e9c723"),
        generator: &hex!(
            "04"
            "009d73616f35f4ab1407d73562c10f"
            "00a52830277958ee84d1315ed31886"
        ),
        order: &hex!("0100000000000000d9ccec8a39e56f"),
        cofactor: 2,
        strength: 56,
        point_size: Some(15),
    },
    CurveRow {
        name: "sect113r2",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.5"),
        field: FieldDef::Binary(113, &[9, 0]),
        a: &hex!("00689918dbec7e5a0dd6dfc0aa55c7"),
        b: &hex!("0095e9a9ec9b297bd4bf36e059184f"),
        generator: &hex!(
            "04"
            "01a57a6a7b26ca5ef52fcdb8164797"
            "00b3adc94ed1fe674c06e695baba1d"
        ),
        order: &hex!("010000000000000108789b2496af93"),
        cofactor: 2,
        strength: 56,
        point_size: Some(15),
    },
    CurveRow {
        name: "sect131r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.22"),
        field: FieldDef::Binary(131, &[8, 3, 2, 0]),
        a: &hex!("07a11b09a76b562144418ff3ff8c2570b8"),
        b: &hex!("0217c05610884b63b9c6c7291678f9d341"),
        generator: &hex!(
            "04"
            "0081baf91fdf9833c40f9c181343638399"
            "078c6e7ea38c001f73c8134b1b4ef9e150"
        ),
        order: &hex!("0400000000000000023123953a9464b54d"),
        cofactor: 2,
        strength: 64,
        point_size: Some(17),
    },
    CurveRow {
        name: "sect131r2",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.23"),
        field: FieldDef::Binary(131, &[8, 3, 2, 0]),
        a: &hex!("03e5a88919d7cafcbf415f07c2176573b2"),
        b: &hex!("04b8266a46c55657ac734ce38f018f2192"),
        generator: &hex!(
            "04"
            "0356dcd8f2f95031ad652d23951bb366a8"
            "0648f06d867940a5366d9e265de9eb240f"
        ),
        order: &hex!("0400000000000000016954a233049ba98f"),
        cofactor: 2,
        strength: 64,
        point_size: Some(17),
    },
    CurveRow {
        name: "sect163k1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.1"),
        field: FieldDef::Binary(163, &[7, 6, 3, 0]),
        a: &hex!("000000000000000000000000000000000000000001"),
        b: &hex!("000000000000000000000000000000000000000001"),
        generator: &hex!(
            "04"
            "02fe13c0537bbc11acaa07d793de4e6d5e5c94eee8"
            "0289070fb05d38ff58321f2e800536d538ccdaa3d9"
        ),
        order: &hex!("04000000000000000000020108a2e0cc0d99f8a5ef"),
        cofactor: 2,
        strength: 80,
        point_size: Some(21),
    },
    CurveRow {
        name: "sect163r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.2"),
        field: FieldDef::Binary(163, &[7, 6, 3, 0]),
        a: &hex!("07b6882caaefa84f9554ff8428bd88e246d2782ae2"),
        b: &hex!("0713612dcddcb40aab946bda29ca91f73af958afd9"),
        generator: &hex!(
            "04"
            "0369979697ab43897789566789567f787a7876a654"
            "00435edb42efafb2989d51fefce3c80988f41ff883"
        ),
        order: &hex!("03ffffffffffffffffffff48aab689c29ca710279b"),
        cofactor: 2,
        strength: 80,
        point_size: Some(21),
    },
    CurveRow {
        name: "sect163r2",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.15"),
        field: FieldDef::Binary(163, &[7, 6, 3, 0]),
        a: &hex!("000000000000000000000000000000000000000001"),
        b: &hex!("020a601907b8c953ca1481eb10512f78744a3205fd"),
        generator: &hex!(
            "04"
            "03f0eba16286a2d57ea0991168d4994637e8343e36"
            "00d51fbc6c71a0094fa2cdd545b11c5c0c797324f1"
        ),
        order: &hex!("040000000000000000000292fe77e70c12a4234c33"),
        cofactor: 2,
        strength: 80,
        point_size: Some(21),
    },
    CurveRow {
        name: "sect193r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.24"),
        field: FieldDef::Binary(193, &[15, 0]),
        a: &hex!("0017858feb7a98975169e171f77b4087de098ac8a911df7b01"),
        b: &hex!("00fdfb49bfe6c3a89facadaa7a1e5bbc7cc1c2e5d831478814"),
        generator: &hex!(
            "04"
            "01f481bc5f0ff84a74ad6cdf6fdef4bf6179625372d8c0c5e1"
            "0025e399f2903712ccf3ea9e3a1ad17fb0b3201b6af7ce1b05"
        ),
        order: &hex!("01000000000000000000000000c7f34a778f443acc920eba49"),
        cofactor: 2,
        strength: 96,
        point_size: Some(25),
    },
    CurveRow {
        name: "sect193r2",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.25"),
        field: FieldDef::Binary(193, &[15, 0]),
        a: &hex!("0163f35a5137c2ce3ea6ed8667190b0bc43ecd69977702709b"),
        b: &hex!("00c9bb9e8927d4d64c377e2ab2856a5b16e3efb7f61d4316ae"),
        generator: &hex!(
            "04"
            "00d9b67d192e0367c803f39e1a7e82ca14a651350aae617e8f"
            "01ce94335607c304ac29e7defbd9ca01f596f927224cdecf6c"
        ),
        order: &hex!("010000000000000000000000015aab561b005413ccd4ee99d5"),
        cofactor: 2,
        strength: 96,
        point_size: Some(25),
    },
    CurveRow {
        name: "sect233k1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.26"),
        field: FieldDef::Binary(233, &[74, 0]),
        a: &hex!("000000000000000000000000000000000000000000000000000000000000"),
        b: &hex!("000000000000000000000000000000000000000000000000000000000001"),
        generator: &hex!(
            "04"
            "017232ba853a7e731af129f22ff4149563a419c26bf50a4c9d6eefad6126"
            "01db537dece819b7f70f555a67c427a8cd9bf18aeb9b56e0c11056fae6a3"
        ),
        order: &hex!("8000000000000000000000000000069d5bb915bcd46efb1ad5f173abdf"),
        cofactor: 4,
        strength: 112,
        point_size: Some(30),
    },
    CurveRow {
        name: "sect233r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.27"),
        field: FieldDef::Binary(233, &[74, 0]),
        a: &hex!("000000000000000000000000000000000000000000000000000000000001"),
        b: &hex!("0066647ede6c332c7f8c0923bb58213b333b20e9ce4281fe115f7d8f90ad"),
        generator: &hex!(
            "04"
            "00fac9dfcbac8313bb2139f1bb755fef65bc391f8b36f8f8eb7371fd558b"
            "01006a08a41903350678e58528bebf8a0beff867a7ca36716f7e01f81052"
        ),
        order: &hex!("01000000000000000000000000000013e974e72f8a6922031d2603cfe0d7"),
        cofactor: 2,
        strength: 112,
        point_size: Some(30),
    },
    CurveRow {
        name: "sect239k1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.3"),
        field: FieldDef::Binary(239, &[158, 0]),
        a: &hex!("000000000000000000000000000000000000000000000000000000000000"),
        b: &hex!("000000000000000000000000000000000000000000000000000000000001"),
        generator: &hex!(
            "04"
            "29a0b6a887a983e9730988a68727a8b2d126c44cc2cc7b2a6555193035dc"
            "76310804f12e549bdb011c103089e73510acb275fc312a5dc6b76553f0ca"
        ),
        order: &hex!("2000000000000000000000000000005a79fec67cb6e91f1c1da800e478a5"),
        cofactor: 4,
        strength: 115,
        point_size: Some(30),
    },
    CurveRow {
        name: "sect283k1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.16"),
        field: FieldDef::Binary(283, &[12, 7, 5, 0]),
        a: &hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "00000000"
        ),
        b: &hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "00000001"
        ),
        generator: &hex!(
            "04"
            "0503213f78ca44883f1a3b8162f188e553cd265f23c1567a16876913b0c2ac24"
            "58492836"
            "01ccda380f1c9e318d90f95d07e5426fe87e45c0e8184698e45962364e341161"
            "77dd2259"
        ),
        order: &hex!(
            "01ffffffffffffffffffffffffffffffffffe9ae2ed07577265dff7f94451e06"
            "1e163c61"
        ),
        cofactor: 4,
        strength: 128,
        point_size: Some(36),
    },
    CurveRow {
        name: "sect283r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.17"),
        field: FieldDef::Binary(283, &[12, 7, 5, 0]),
        a: &hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "00000001"
        ),
        b: &hex!(
            "027b680ac8b8596da5a4af8a19a0303fca97fd7645309fa2a581485af6263e31"
            "3b79a2f5"
        ),
        generator: &hex!(
            "04"
            "05f939258db7dd90e1934f8c70b0dfec2eed25b8557eac9c80e2e198f8cdbecd"
            "86b12053"
            "03676854fe24141cb98fe6d4b20d02b4516ff702350eddb0826779c813f0df45"
            "be8112f4"
        ),
        order: &hex!(
            "03ffffffffffffffffffffffffffffffffffef90399660fc938a90165b042a7c"
            "efadb307"
        ),
        cofactor: 2,
        strength: 128,
        point_size: Some(36),
    },
    CurveRow {
        name: "sect409k1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.36"),
        field: FieldDef::Binary(409, &[87, 0]),
        a: &hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000000000000000000000000000000"
        ),
        b: &hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000000000000000000000000000001"
        ),
        generator: &hex!(
            "04"
            "0060f05f658f49c1ad3ab1890f7184210efd0987e307c84c27accfb8f9f67cc2"
            "c460189eb5aaaa62ee222eb1b35540cfe9023746"
            "01e369050b7c4e42acba1dacbf04299c3460782f918ea427e6325165e9ea10e3"
            "da5f6c42e9c55215aa9ca27a5863ec48d8e0286b"
        ),
        order: &hex!(
            "7ffffffffffffffffffffffffffffffffffffffffffffffffffe5f83b2d4ea20"
            "400ec4557d5ed3e3e7ca5b4b5c83b8e01e5fcf"
        ),
        cofactor: 4,
        strength: 192,
        point_size: Some(52),
    },
    CurveRow {
        name: "sect409r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.37"),
        field: FieldDef::Binary(409, &[87, 0]),
        a: &hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000000000000000000000000000001"
        ),
        b: &hex!(
            "0021a5c2c8ee9feb5c4b9a753b7b476b7fd6422ef1f3dd674761fa99d6ac27c8"
            "a9a197b272822f6cd57a55aa4f50ae317b13545f"
        ),
        generator: &hex!(
            "04"
            "015d4860d088ddb3496b0c6064756260441cde4af1771d4db01ffe5b34e59703"
            "dc255a868a1180515603aeab60794e54bb7996a7"
            "0061b1cfab6be5f32bbfa78324ed106a7636b9c5a7bd198d0158aa4f5488d08f"
            "38514f1fdf4b4f40d2181b3681c364ba0273c706"
        ),
        order: &hex!(
            "010000000000000000000000000000000000000000000000000001e2aad6a612"
            "f33307be5fa47c3c9e052f838164cd37d9a21173"
        ),
        cofactor: 2,
        strength: 192,
        point_size: Some(52),
    },
    CurveRow {
        name: "sect571k1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.38"),
        field: FieldDef::Binary(571, &[10, 5, 2, 0]),
        a: &hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000000"
        ),
        b: &hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000001"
        ),
        generator: &hex!(
            "04"
            "026eb7a859923fbc82189631f8103fe4ac9ca2970012d5d46024804801841ca4"
            "4370958493b205e647da304db4ceb08cbbd1ba39494776fb988b47174dca88c7"
            "e2945283a01c8972"
            "0349dc807f4fbf374f4aeade3bca95314dd58cec9f307a54ffc61efc006d8a2c"
            "9d4979c0ac44aea74fbebbb9f772aedcb620b01a7ba7af1b320430c8591984f6"
            "01cd4c143ef1c7a3"
        ),
        order: &hex!(
            "0200000000000000000000000000000000000000000000000000000000000000"
            "00000000131850e1f19a63e4b391a8db917f4138b630d84be5d639381e91deb4"
            "5cfe778f637c1001"
        ),
        cofactor: 4,
        strength: 256,
        point_size: Some(72),
    },
    CurveRow {
        name: "sect571r1",
        oid: ObjectIdentifier::new_unwrap("1.3.132.0.39"),
        field: FieldDef::Binary(571, &[10, 5, 2, 0]),
        a: &hex!(
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000000000000000000000000000000000000000000000000000000"
            "0000000000000001"
        ),
        b: &hex!(
            "02f40e7e2221f295de297117b7f3d62f5c6a97ffcb8ceff1cd6ba8ce4a9a18ad"
            "84ffabbd8efa59332be7ad6756a66e294afd185a78ff12aa520e4de739baca0c"
            "7ffeff7f2955727a"
        ),
        generator: &hex!(
            "04"
            "0303001d34b856296c16c0d40d3cd7750a93d1d2955fa80aa5f40fc8db7b2abd"
            "bde53950f4c0d293cdd711a35b67fb1499ae60038614f1394abfa3b4c850d927"
            "e1e7769c8eec2d19"
            "037bf27342da639b6dccfffeb73d69d78c6c27a6009cbbca1980f8533921e8a6"
            "84423e43bab08a576291af8f461bb2a8b3531d2f0485c19b16e2f1516e23dd3c"
            "1a4827af1b8ac15b"
        ),
        order: &hex!(
            "03ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "ffffffffe661ce18ff55987308059b186823851ec7dd9ca1161de93d5174d66e"
            "8382e9bb2fe84e47"
        ),
        cofactor: 2,
        strength: 256,
        point_size: Some(72),
    },
];
