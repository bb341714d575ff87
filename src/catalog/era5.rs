//! ERA5 datasets published in the `nsf-ncar-era5` bucket.

use super::{Dataset, Granularity, Variable};

const fn var(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    typical_size: &'static str,
) -> Variable {
    Variable {
        id,
        name,
        description,
        unit: None,
        typical_size: Some(typical_size),
    }
}

const PRESSURE_LEVEL_VARIABLES: &[Variable] = &[
    var("128_060_pv", "Potential Vorticity", "位涡", "~1 GB/day"),
    var("128_129_z", "Geopotential", "位势", "~200 MB/day"),
    var("128_130_t", "Temperature", "温度", "~200 MB/day"),
    var("128_131_u", "U-component of wind", "U风分量", "~200 MB/day"),
    var("128_132_v", "V-component of wind", "V风分量", "~200 MB/day"),
    var("128_133_q", "Specific Humidity", "比湿", "~200 MB/day"),
    var("128_135_w", "Vertical Velocity", "垂直速度", "~200 MB/day"),
    var("128_157_r", "Relative Humidity", "相对湿度", "~200 MB/day"),
    var("128_248_cc", "Fraction of Cloud Cover", "云量", "~200 MB/day"),
];

const SURFACE_VARIABLES: &[Variable] = &[
    var("128_167_2t", "2m Temperature", "2米温度", "~1 GB/month"),
    var("128_168_2d", "2m Dewpoint Temperature", "2米露点温度", "~1 GB/month"),
    var("128_165_10u", "10m U-component of wind", "10米U风分量", "~1 GB/month"),
    var("128_166_10v", "10m V-component of wind", "10米V风分量", "~1 GB/month"),
    var("128_134_sp", "Surface Pressure", "地表气压", "~1 GB/month"),
    var("128_151_msl", "Mean Sea Level Pressure", "海平面气压", "~966 MB/month"),
    var("128_164_tcc", "Total Cloud Cover", "总云量", "~1 GB/month"),
    var("128_129_z", "Geopotential", "位势", "~1 GB/month"),
    var("128_034_sstk", "Sea Surface Temperature", "海表温度", "~680 MB/month"),
    var("128_136_tcw", "Total Column Water", "总柱水汽", "~1 GB/month"),
    var("128_137_tcwv", "Total Column Water Vapour", "总柱水汽", "~1 GB/month"),
    var("128_141_sd", "Snow Depth", "雪深", "~271 MB/month"),
    var("128_235_skt", "Skin Temperature", "皮肤温度", "~1 GB/month"),
    var("128_059_cape", "CAPE", "对流有效位能", "~708 MB/month"),
];

const ACCUMULATED_FORECAST_VARIABLES: &[Variable] = &[
    var("128_142_lsp", "Large-scale Precipitation", "大尺度降水", "~300 MB/file"),
    var("128_143_cp", "Convective Precipitation", "对流降水", "~240 MB/file"),
    var("128_144_sf", "Snowfall", "降雪", "~150 MB/file"),
    var("128_146_sshf", "Surface Sensible Heat Flux", "感热通量", "~600 MB/file"),
    var("128_147_slhf", "Surface Latent Heat Flux", "潜热通量", "~600 MB/file"),
    var("128_169_ssrd", "Surface Solar Radiation Downwards", "地表下行太阳辐射", "~350 MB/file"),
    var("128_175_strd", "Surface Thermal Radiation Downwards", "地表下行热辐射", "~540 MB/file"),
    var("128_176_ssr", "Surface Net Solar Radiation", "地表净太阳辐射", "~600 MB/file"),
    var("128_177_str", "Surface Net Thermal Radiation", "地表净热辐射", "~600 MB/file"),
    var("128_182_e", "Evaporation", "蒸发", "~600 MB/file"),
    var("128_205_ro", "Runoff", "径流", "~600 MB/file"),
];

pub static ERA5_DATASETS: &[Dataset] = &[
    Dataset {
        id: "e5.oper.an.pl",
        name: "Pressure Level Analysis",
        description: "Atmospheric variables on 37 pressure levels",
        frequency: "Hourly",
        granularity: Granularity::Daily,
        variables: PRESSURE_LEVEL_VARIABLES,
    },
    Dataset {
        id: "e5.oper.an.sfc",
        name: "Surface Analysis",
        description: "Surface parameters",
        frequency: "Monthly",
        granularity: Granularity::Monthly,
        variables: SURFACE_VARIABLES,
    },
    Dataset {
        id: "e5.oper.fc.sfc.accumu",
        name: "Accumulated Forecast",
        description: "Accumulated surface parameters",
        frequency: "Semi-monthly",
        granularity: Granularity::SemiMonthly,
        variables: ACCUMULATED_FORECAST_VARIABLES,
    },
];
