pub mod chart;
pub mod district_table;
pub mod filter_bar;
pub mod share_chart;
pub mod status;
pub mod summary;

pub use chart::{ChartKind, RoomChart};
pub use district_table::DistrictTable;
pub use filter_bar::FilterBar;
pub use share_chart::ShareChart;
