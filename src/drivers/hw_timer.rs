//! Hardware timer module using ESP-IDF's esp_timer API.
//!
//! Creates the two periodic timers that drive the demo — a fast serial
//! poll tick and the 1 Hz heartbeat — each pushing an event into the
//! lock-free SPSC queue. On simulation targets the main loop's sleep
//! drives the events instead.
//!
//! Timer callbacks execute in the ESP timer task context (not ISR), so
//! they can safely call push_event() which uses AtomicU8.

use crate::events::{push_event, Event};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
static mut POLL_TIMER: esp_timer_handle_t = core::ptr::null_mut();
#[cfg(target_os = "espidf")]
static mut HEARTBEAT_TIMER: esp_timer_handle_t = core::ptr::null_mut();

#[cfg(target_os = "espidf")]
unsafe extern "C" fn poll_tick_cb(_arg: *mut core::ffi::c_void) {
    push_event(Event::SerialDataReady);
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn heartbeat_tick_cb(_arg: *mut core::ffi::c_void) {
    push_event(Event::HeartbeatTick);
}

/// Start the periodic tick timers.
///
/// Failure is logged and non-fatal: the firmware degrades to a silent
/// device rather than refusing to boot.
#[cfg(target_os = "espidf")]
pub fn start_timers(poll_interval_ms: u32, heartbeat_interval_ms: u32) {
    // SAFETY: POLL_TIMER and HEARTBEAT_TIMER are written here once at boot
    // from the single main-task context before any timer callbacks fire.
    // The callbacks themselves only call push_event(), which is ISR-safe.
    unsafe {
        let poll_args = esp_timer_create_args_t {
            callback: Some(poll_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"serial_poll\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&poll_args, &raw mut POLL_TIMER);
        if ret != ESP_OK {
            log::error!("hw_timer: poll timer create failed (rc={})", ret);
            return;
        }
        let ret = esp_timer_start_periodic(POLL_TIMER, u64::from(poll_interval_ms) * 1000);
        if ret != ESP_OK {
            log::error!("hw_timer: poll timer start failed (rc={})", ret);
            return;
        }

        let hb_args = esp_timer_create_args_t {
            callback: Some(heartbeat_tick_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"heartbeat\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&hb_args, &raw mut HEARTBEAT_TIMER);
        if ret != ESP_OK {
            log::error!("hw_timer: heartbeat timer create failed (rc={})", ret);
            return;
        }
        let ret =
            esp_timer_start_periodic(HEARTBEAT_TIMER, u64::from(heartbeat_interval_ms) * 1000);
        if ret != ESP_OK {
            log::error!("hw_timer: heartbeat timer start failed (rc={})", ret);
            return;
        }

        info!(
            "hw_timer: poll@{}ms + heartbeat@{}ms started",
            poll_interval_ms, heartbeat_interval_ms
        );
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn start_timers(_poll_interval_ms: u32, _heartbeat_interval_ms: u32) {
    log::info!("hw_timer(sim): timers not started (events driven by sleep loop)");
}
