//! 地址生成与解析一致性测试

use std::collections::HashSet;

use sc_wm::domain::{
    AddressParseError, AddressParser, AisleConfig, BinDirection, BinLabeling, FormatConfig,
    LayoutError, MAX_BIN_NUMBER, StorageStructure, StructureProps, parse_address,
};

const SEPARATORS: [char; 3] = ['-', '.', '_'];
const LABELINGS: [BinLabeling; 2] = [BinLabeling::Letters, BinLabeling::Numbers];
const DIRECTIONS: [BinDirection; 2] = [BinDirection::BottomUp, BinDirection::TopDown];

fn all_formats(aisle_digits: u8, shelf_digits: u8) -> Vec<FormatConfig> {
    let mut formats = Vec::new();
    for separator in SEPARATORS {
        for labeling in LABELINGS {
            for direction in DIRECTIONS {
                formats.push(
                    FormatConfig::new(separator, aisle_digits, shelf_digits, labeling, direction)
                        .unwrap(),
                );
            }
        }
    }
    formats
}

/// 在位数范围内取几个有代表性的值
fn sample_values(digits: u8) -> Vec<u32> {
    let max = 10u32.pow(u32::from(digits)) - 1;
    let mut values = vec![1, max, max / 2 + 1];
    values.dedup();
    values
}

#[test]
fn test_heuristic_round_trip_for_compatible_widths() {
    // 启发式规则能准确还原的位数组合
    let widths = [(1, 1), (1, 2), (2, 2), (2, 3)];

    for (aisle_digits, shelf_digits) in widths {
        for format in all_formats(aisle_digits, shelf_digits) {
            for aisle in sample_values(aisle_digits) {
                for shelf in sample_values(shelf_digits) {
                    for index in [0, 3, 25] {
                        let address = format
                            .generate_address("FAB", "EST", aisle, shelf, index, 26)
                            .unwrap();
                        let parsed = parse_address(&address)
                            .unwrap_or_else(|e| panic!("{address} failed: {e}"));

                        assert_eq!(parsed.warehouse_code, "FAB");
                        assert_eq!(parsed.zone_code, "EST");
                        assert_eq!(parsed.separator, format.separator());
                        assert_eq!(parsed.normalized_address, address);
                        assert!(
                            parsed.matches_position(aisle, shelf),
                            "{address} -> {}/{}",
                            parsed.aisle,
                            parsed.shelf
                        );
                        assert_eq!(
                            format.position_index(&parsed.bin, 26).unwrap(),
                            index,
                            "{address}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_heuristic_is_ambiguous_for_other_widths() {
    let format = FormatConfig::default().with_digits(1, 3).unwrap();
    let address = format.generate_address("FAB", "EST", 1, 502, 0, 1).unwrap();
    assert_eq!(address, "FAB-EST-1502-A");

    // 编码和库区总能还原，巷道/货架被猜成 15/02
    let parsed = parse_address(&address).unwrap();
    assert_eq!(parsed.warehouse_code, "FAB");
    assert_eq!(parsed.zone_code, "EST");
    assert!(!parsed.matches_position(1, 502));

    // 按格式解析可以准确还原
    let exact = AddressParser::for_format(format).parse(&address).unwrap();
    assert!(exact.matches_position(1, 502));
}

#[test]
fn test_format_mode_round_trip_for_all_widths() {
    for aisle_digits in 1..=3 {
        for shelf_digits in 1..=3 {
            for format in all_formats(aisle_digits, shelf_digits) {
                let parser = AddressParser::for_format(format);
                for aisle in sample_values(aisle_digits) {
                    for shelf in sample_values(shelf_digits) {
                        let address = format
                            .generate_address("WH01", "Z2", aisle, shelf, 1, 12)
                            .unwrap();
                        let parsed = parser.parse(&address.to_lowercase()).unwrap();
                        assert!(parsed.matches_position(aisle, shelf), "{address}");
                        assert_eq!(parsed.warehouse_code, "WH01");
                        assert_eq!(parsed.zone_code, "Z2");
                        assert_eq!(format.position_index(&parsed.bin, 12).unwrap(), 1);
                    }
                }
            }
        }
    }
}

#[test]
fn test_every_generated_address_parses() {
    let props = StructureProps {
        aisle_configs: vec![
            AisleConfig::new(2, 12, 4),
            AisleConfig::new(1, 3, 26),
            AisleConfig::new(9, 1, 1),
        ],
        ..StructureProps::default()
    };
    let structure = StorageStructure::from_props(props).unwrap();
    let bins = structure.generate_bin_data("FAB", "EST").unwrap();
    assert_eq!(bins.len() as u64, structure.total_bins());

    let mut seen = HashSet::new();
    for bin in &bins {
        assert!(seen.insert(bin.address.clone()), "duplicate {}", bin.address);
        let parsed = parse_address(&bin.address).unwrap();
        assert!(parsed.matches_position(bin.aisle, bin.shelf), "{}", bin.address);
        assert_eq!(parsed.bin, bin.position);
    }
}

#[test]
fn test_uniform_enumeration_count() {
    for (aisles, shelves, bins_per_shelf) in [(1, 1, 1), (4, 7, 3), (9, 20, 26), (0, 5, 5)] {
        let structure =
            StorageStructure::uniform(aisles, shelves, bins_per_shelf, FormatConfig::default());
        let addresses = structure.generate_all_addresses("FAB", "EST").unwrap();
        let expected = aisles as usize * shelves as usize * bins_per_shelf as usize;
        assert_eq!(addresses.len(), expected);
        assert_eq!(addresses.len() as u64, structure.total_bins());

        let unique: HashSet<_> = addresses.iter().collect();
        assert_eq!(unique.len(), expected);
    }
}

#[test]
fn test_concrete_cases() {
    let parsed = parse_address("fab-est-102-b").unwrap();
    assert_eq!(
        (
            parsed.warehouse_code.as_str(),
            parsed.zone_code.as_str(),
            parsed.aisle,
            parsed.shelf,
            parsed.bin.as_str()
        ),
        ("FAB", "EST", 1, 2, "B")
    );
    assert_eq!(parsed.normalized_address, "FAB-EST-102-B");

    let err = parse_address("FAB-EST-102").unwrap_err();
    assert!(matches!(
        err,
        AddressParseError::SegmentCount {
            expected: 4,
            found: 3,
            ..
        }
    ));

    assert_eq!(
        parse_address("FABEST102B").unwrap_err(),
        AddressParseError::NoSeparator
    );

    // '-' 优先，'.' 不会被当作分隔符
    assert!(parse_address("FAB.EST-102-B").is_err());
    assert!(matches!(
        parse_address("FAB.EST-1-102-B"),
        Err(AddressParseError::InvalidWarehouseCode { .. })
    ));
}

#[test]
fn test_bin_labeling_boundaries() {
    let letters = FormatConfig::default();
    assert_eq!(letters.format_position(0, 5).unwrap(), "A");
    assert_eq!(
        letters
            .with_bin_direction(BinDirection::TopDown)
            .format_position(0, 5)
            .unwrap(),
        "E"
    );
    assert_eq!(
        letters
            .with_bin_labeling(BinLabeling::Numbers)
            .format_position(0, 5)
            .unwrap(),
        "1"
    );
}

#[test]
fn test_normalization_idempotent_via_props() {
    let structure = StorageStructure::from_props(StructureProps {
        aisles: 2,
        shelves_per_aisle: 9,
        bins_per_shelf: 1,
        aisle_configs: vec![AisleConfig::new(5, 3, 4), AisleConfig::new(3, 2, 2)],
        ..StructureProps::default()
    })
    .unwrap();

    let again = StorageStructure::from_props(structure.to_props()).unwrap();
    assert_eq!(again, structure);
    assert_eq!(structure.aisles(), 5);
    assert_eq!(structure.shelves_per_aisle(), 9);
    assert_eq!(structure.bins_per_shelf(), 4);
}

#[test]
fn test_every_label_round_trips_at_full_shelf() {
    for (labeling, total) in [(BinLabeling::Letters, 26), (BinLabeling::Numbers, MAX_BIN_NUMBER)] {
        for direction in DIRECTIONS {
            let format = FormatConfig::default()
                .with_bin_labeling(labeling)
                .with_bin_direction(direction);
            let parser = AddressParser::for_format(format);

            for index in 0..total {
                let address = format
                    .generate_address("FAB", "EST", 3, 7, index, total)
                    .unwrap();
                for parsed in [parse_address(&address).unwrap(), parser.parse(&address).unwrap()] {
                    assert!(parsed.matches_position(3, 7), "{address}");
                    assert_eq!(
                        format.position_index(&parsed.bin, total).unwrap(),
                        index,
                        "{address}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_full_numbered_zone_parses() {
    let format = FormatConfig::default().with_bin_labeling(BinLabeling::Numbers);
    let structure =
        StorageStructure::irregular(vec![AisleConfig::new(1, 2, MAX_BIN_NUMBER)], format).unwrap();
    let bins = structure.generate_bin_data("FAB", "EST").unwrap();
    assert_eq!(bins.len(), 2 * MAX_BIN_NUMBER as usize);
    assert_eq!(bins[98].address, "FAB-EST-101-99");
    for bin in &bins {
        assert!(parse_address(&bin.address).is_ok(), "{}", bin.address);
    }
}

#[test]
fn test_unparseable_labels_are_never_generated() {
    // 三位数字标签无法被解析，整个库区按配置错误拒绝
    let format = FormatConfig::default().with_bin_labeling(BinLabeling::Numbers);
    let structure =
        StorageStructure::irregular(vec![AisleConfig::new(1, 1, 120)], format).unwrap();
    assert_eq!(
        structure.generate_bin_data("FAB", "EST"),
        Err(LayoutError::BinNumberOverflow(120))
    );
    assert!(parse_address("FAB-EST-101-100").is_err());
}

#[test]
fn test_huge_zones_fail_fast() {
    let letters = StorageStructure::uniform(200_000, 200_000, 27, FormatConfig::default());
    assert_eq!(
        letters.generate_all_addresses("FAB", "EST"),
        Err(LayoutError::LetterIndexOverflow(26))
    );

    let empty = StorageStructure::uniform(u32::MAX, 0, 5, FormatConfig::default());
    assert_eq!(empty.total_bins(), 0);
    assert!(empty.generate_all_addresses("FAB", "EST").unwrap().is_empty());
}
