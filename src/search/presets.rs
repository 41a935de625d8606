use crate::api::schema::places::Coordinates;

/// 热门地点预设，坐标已知，选中后跳过地理编码直接搜索
#[derive(Debug, Clone, Copy)]
pub struct PresetLocation {
    pub name: &'static str,
    pub coordinates: Coordinates,
}

pub const POPULAR_LOCATIONS: &[PresetLocation] = &[
    PresetLocation {
        name: "Kuala Lumpur City Center",
        coordinates: Coordinates {
            lat: 3.1573,
            lng: 101.7116,
        },
    },
    PresetLocation {
        name: "Petaling Jaya",
        coordinates: Coordinates {
            lat: 3.1073,
            lng: 101.6067,
        },
    },
    PresetLocation {
        name: "Subang Jaya",
        coordinates: Coordinates {
            lat: 3.0567,
            lng: 101.5851,
        },
    },
    PresetLocation {
        name: "Shah Alam",
        coordinates: Coordinates {
            lat: 3.0733,
            lng: 101.5185,
        },
    },
    PresetLocation {
        name: "Mont Kiara",
        coordinates: Coordinates {
            lat: 3.1717,
            lng: 101.6506,
        },
    },
];

/// 按名称查找预设（不区分大小写）
pub fn find_preset(name: &str) -> Option<&'static PresetLocation> {
    POPULAR_LOCATIONS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}
