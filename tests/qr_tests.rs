#[cfg(test)]
mod qr_proptests {

    use prop::string::string_regex;
    use proptest::prelude::*;

    use symbolism::*;

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    pub fn qr_strategy(regex: &str, max_sz: usize) -> impl Strategy<Value = (ECLevel, String)> {
        let pattern = format!(r"{}{{1,{}}}", regex, max_sz);
        (ec_level_strategy(), string_regex(&pattern).unwrap())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn proptest_numeric_is_deterministic(params in qr_strategy("[0-9]", 300)) {
            let (ecl, data) = params;

            let qr1 = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();
            let qr2 = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();

            prop_assert_eq!(qr1.to_matrix(), qr2.to_matrix());
            prop_assert_eq!(qr1.mask(), qr2.mask());
        }

        #[test]
        fn proptest_alphanumeric_is_square(params in qr_strategy(r"[0-9A-Z $%*+\-./:]", 300)) {
            let (ecl, data) = params;

            let qr = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();
            let matrix = qr.to_matrix();
            let w = *qr.version() as usize * 4 + 17;

            prop_assert_eq!(qr.width(), w);
            prop_assert_eq!(matrix.len(), w);
            prop_assert!(matrix.iter().all(|row| row.len() == w));
        }

        #[test]
        fn proptest_byte_svg_is_deterministic(params in qr_strategy(r"[a-z0-9 .,!?]", 120)) {
            let (ecl, data) = params;
            let options = QrOptions { error_correction: ecl, ..Default::default() };

            let svg1 = generate_qr(&data, &options).unwrap();
            let svg2 = generate_qr(&data, &options).unwrap();

            prop_assert_eq!(svg1, svg2);
        }

        #[test]
        fn proptest_fixed_version_size(ver in 1u8..=40, ecl in ec_level_strategy()) {
            let version = Version::new(ver).unwrap();
            let options = QrOptions {
                error_correction: ecl,
                version: VersionChoice::Fixed(version),
                mask: MaskChoice::Fixed(MaskPattern::new(ver % 8)),
                format: OutputFormat::Matrix,
                ..Default::default()
            };

            let out = generate_qr("12345", &options).unwrap();
            let QrOutput::Matrix(m) = out else { panic!("Expected matrix output") };

            prop_assert_eq!(m.version, ver as usize);
            prop_assert_eq!(m.size, 4 * ver as usize + 17);
            prop_assert_eq!(m.matrix.len(), m.size);
            prop_assert!(m.matrix.iter().all(|row| row.len() == m.size));
            prop_assert_eq!(m.error_correction, ecl);
        }
    }
}

#[cfg(test)]
mod qr_tests {
    use test_case::test_case;

    use symbolism::{ECLevel, MaskPattern, Mode, QRBuilder, SymbolError, Version};

    #[test_case("Hello, world!🌎".to_string(), 1, ECLevel::L; "test_qr_1")]
    #[test_case("TEST".to_string(), 1, ECLevel::M; "test_qr_2")]
    #[test_case("12345".to_string(), 1, ECLevel::Q; "test_qr_3")]
    #[test_case("OK".to_string(), 1, ECLevel::H; "test_qr_4")]
    #[test_case("B3@j🎮#Z%8v🍣K!🔑3zC^8📖&r💾F9*🔐b6🌼".repeat(3), 7, ECLevel::L; "test_qr_5")]
    #[test_case("A11111111111111".repeat(11), 7, ECLevel::M; "test_qr_6")]
    #[test_case("1234567890".repeat(15), 7, ECLevel::H; "test_qr_7")]
    #[test_case("A11111111111111".repeat(20), 10, ECLevel::M; "test_qr_8")]
    #[test_case("A111111111111111".repeat(100), 27, ECLevel::M; "test_qr_9")]
    #[test_case("1234567890".repeat(305), 40, ECLevel::H; "test_qr_10")]
    fn test_qr(data: String, ver: u8, ecl: ECLevel) {
        let version = Version::new(ver).unwrap();
        let qr = QRBuilder::new(data.as_bytes()).version(version).ec_level(ecl).build().unwrap();

        assert_eq!(qr.version(), version);
        assert_eq!(qr.width(), version.width());
        assert_eq!(qr.ec_level(), ecl);
        assert!(qr.mask().is_some());
    }

    #[test_case("0".repeat(7089), ECLevel::L, Mode::Numeric)]
    #[test_case("A".repeat(4296), ECLevel::L, Mode::Alphanumeric)]
    #[test_case("a".repeat(2953), ECLevel::L, Mode::Byte)]
    #[test_case("a".repeat(1273), ECLevel::H, Mode::Byte)]
    fn test_max_capacity(data: String, ecl: ECLevel, mode: Mode) {
        assert_eq!(Mode::detect(data.as_bytes()), mode);
        let qr = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();
        assert_eq!(qr.version(), Version::MAX);

        let over = format!("{data}{}", &data[..1]);
        let err = QRBuilder::new(over.as_bytes()).ec_level(ecl).build().unwrap_err();
        assert!(err.is_capacity(), "{err}");
    }

    #[test]
    fn test_5000_bytes_at_h_is_capacity_error() {
        let data = "x".repeat(5000);
        let err = QRBuilder::new(data.as_bytes()).ec_level(ECLevel::H).build().unwrap_err();
        assert!(matches!(
            err,
            SymbolError::Capacity { required_bits, available_bits }
                if required_bits > available_bits && available_bits == 1276 * 8
        ));
    }

    #[test]
    fn test_fixed_version_too_small() {
        let data = "HELLO WORLD".repeat(3);
        let err = QRBuilder::new(data.as_bytes())
            .version(Version::new(1).unwrap())
            .ec_level(ECLevel::H)
            .build()
            .unwrap_err();
        assert!(err.is_capacity());
    }

    #[test]
    fn test_auto_mask_is_reproducible_with_fixed_mask() {
        let auto = QRBuilder::new(b"HELLO WORLD").ec_level(ECLevel::Q).build().unwrap();
        let mask = auto.mask().unwrap();
        assert_eq!(mask, MaskPattern::new(0));

        let fixed = QRBuilder::new(b"HELLO WORLD").ec_level(ECLevel::Q).mask(mask).build().unwrap();
        assert_eq!(auto.to_matrix(), fixed.to_matrix());
    }

    #[test]
    fn test_masks_differ() {
        let mut matrices = (0..8)
            .map(|m| {
                let qr = QRBuilder::new(b"01234567").mask(MaskPattern::new(m)).build().unwrap();
                qr.to_matrix()
            })
            .collect::<Vec<_>>();
        matrices.dedup();
        assert_eq!(matrices.len(), 8);
    }

    #[test]
    fn test_version_info_present_from_7() {
        let qr = QRBuilder::new(b"1").version(Version::new(7).unwrap()).build().unwrap();
        let w = qr.width();
        let m = qr.to_matrix();
        // Version 7 info 000111110010010100, least significant bit at (0, w - 11)
        let bits = (0..6).flat_map(|i| (0..3).map(move |j| (i, j))).collect::<Vec<_>>();
        let read = bits.iter().rev().map(|&(i, j)| m[i][w - 11 + j]).collect::<Vec<_>>();
        let exp = "000111110010010100".chars().map(|c| c == '1').collect::<Vec<_>>();
        assert_eq!(read, exp);
    }
}
