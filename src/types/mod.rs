pub mod app_state;
pub mod waypoint_list;
