//! Static province and region lookup tables.
//!
//! Canonical names are lowercase, space-separated. The three canonical
//! regions follow the conventional north/central/south split.

pub const REGION_NORTH: &str = "miền bắc";
pub const REGION_CENTRAL: &str = "miền trung";
pub const REGION_SOUTH: &str = "miền nam";

/// Canonical province/municipality name -> canonical region.
pub const PROVINCES: &[(&str, &str)] = &[
    ("an giang", REGION_SOUTH),
    ("bà rịa vũng tàu", REGION_SOUTH),
    ("bạc liêu", REGION_SOUTH),
    ("bắc giang", REGION_NORTH),
    ("bắc kạn", REGION_NORTH),
    ("bắc ninh", REGION_NORTH),
    ("bến tre", REGION_SOUTH),
    ("bình dương", REGION_SOUTH),
    ("bình định", REGION_CENTRAL),
    ("bình phước", REGION_SOUTH),
    ("bình thuận", REGION_CENTRAL),
    ("cà mau", REGION_SOUTH),
    ("cao bằng", REGION_NORTH),
    ("cần thơ", REGION_SOUTH),
    ("đà nẵng", REGION_CENTRAL),
    ("đắk lắk", REGION_CENTRAL),
    ("đắk nông", REGION_CENTRAL),
    ("điện biên", REGION_NORTH),
    ("đồng nai", REGION_SOUTH),
    ("đồng tháp", REGION_SOUTH),
    ("gia lai", REGION_CENTRAL),
    ("hà giang", REGION_NORTH),
    ("hà nam", REGION_NORTH),
    ("hà nội", REGION_NORTH),
    ("hà tĩnh", REGION_CENTRAL),
    ("hải dương", REGION_NORTH),
    ("hải phòng", REGION_NORTH),
    ("hậu giang", REGION_SOUTH),
    ("hòa bình", REGION_NORTH),
    ("hồ chí minh", REGION_SOUTH),
    ("hưng yên", REGION_NORTH),
    ("khánh hòa", REGION_CENTRAL),
    ("kiên giang", REGION_SOUTH),
    ("kon tum", REGION_CENTRAL),
    ("lai châu", REGION_NORTH),
    ("lạng sơn", REGION_NORTH),
    ("lào cai", REGION_NORTH),
    ("lâm đồng", REGION_CENTRAL),
    ("long an", REGION_SOUTH),
    ("nam định", REGION_NORTH),
    ("nghệ an", REGION_CENTRAL),
    ("ninh bình", REGION_NORTH),
    ("ninh thuận", REGION_CENTRAL),
    ("phú thọ", REGION_NORTH),
    ("phú yên", REGION_CENTRAL),
    ("quảng bình", REGION_CENTRAL),
    ("quảng nam", REGION_CENTRAL),
    ("quảng ngãi", REGION_CENTRAL),
    ("quảng ninh", REGION_NORTH),
    ("quảng trị", REGION_CENTRAL),
    ("sóc trăng", REGION_SOUTH),
    ("sơn la", REGION_NORTH),
    ("tây ninh", REGION_SOUTH),
    ("thái bình", REGION_NORTH),
    ("thái nguyên", REGION_NORTH),
    ("thanh hóa", REGION_CENTRAL),
    ("thừa thiên huế", REGION_CENTRAL),
    ("tiền giang", REGION_SOUTH),
    ("trà vinh", REGION_SOUTH),
    ("tuyên quang", REGION_NORTH),
    ("vĩnh long", REGION_SOUTH),
    ("vĩnh phúc", REGION_NORTH),
    ("yên bái", REGION_NORTH),
];

/// Region surface keyword -> canonical region, ordered longest-first so the
/// most specific phrase wins the substring search.
pub const REGION_KEYWORDS: &[(&str, &str)] = &[
    ("đồng bằng sông cửu long", REGION_SOUTH),
    ("tây nguyên", REGION_CENTRAL),
    ("miền trung", REGION_CENTRAL),
    ("miền bắc", REGION_NORTH),
    ("miền nam", REGION_SOUTH),
    ("tây bắc", REGION_NORTH),
    ("đông bắc", REGION_NORTH),
    ("trung bộ", REGION_CENTRAL),
    ("bắc bộ", REGION_NORTH),
    ("nam bộ", REGION_SOUTH),
];

/// Looks a normalized candidate up in the canonical province list.
pub fn province_region(candidate: &str) -> Option<&'static str> {
    PROVINCES
        .iter()
        .find(|(name, _)| *name == candidate)
        .map(|(_, region)| *region)
}
