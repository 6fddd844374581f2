//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the counter store and its tick
//! schedulers, input state, timing, layout, and configuration. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `counterstate` – counter value, live labels/particles, flash, history list
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed window and screen settings
//! - `input` – per-frame keyboard and pointer state
//! - `listscroll` – scroll offset of the history list
//! - `randomsource` – injectable random draws and the spawn generator
//! - `screenlayout` – widget rectangles derived from the screen size
//! - `screensize` – current window dimensions in pixels
//! - `tickscheduler` – Idle/Active schedulers driving the animations
//! - `worldtime` – simulation time and delta
pub mod counterstate;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod listscroll;
pub mod randomsource;
pub mod screenlayout;
pub mod screensize;
pub mod tickscheduler;
pub mod worldtime;
