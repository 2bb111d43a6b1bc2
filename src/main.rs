//! UartEcho Firmware — Main Entry Point
//!
//! Hexagonal architecture with event-driven execution.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  EchoUart          LogEventSink        hw_timer          │
//! │  (ByteChannel)     (EventSink)         (event producer)  │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           EchoService (pure logic)             │      │
//! │  │  line reassembly · reply policy · heartbeat    │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use log::info;

use uartecho::adapters::log_sink::LogEventSink;
use uartecho::app::service::EchoService;
use uartecho::config::SystemConfig;
use uartecho::drivers::{hw_timer, uart::EchoUart};
use uartecho::events::{self, Event};
use uartecho::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("UartEcho v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config
        .validate()
        .map_err(|reason| anyhow::anyhow!("invalid config: {reason}"))?;

    // ── 3. UART peripheral ────────────────────────────────────
    // A configuration failure is fatal: bail out before any timers or
    // callbacks are installed for the port.
    let mut uart = EchoUart::configure(pins::ECHO_UART_PORT, &config.uart)
        .context("UART configuration failed at startup")?;

    // ── 4. Tick timers ────────────────────────────────────────
    hw_timer::start_timers(config.serial_poll_interval_ms, config.heartbeat_interval_ms);

    // ── 5. Application service ────────────────────────────────
    let mut log_sink = LogEventSink::new();
    let mut app = EchoService::new(pins::ECHO_UART_PORT);
    app.start(&mut log_sink);

    info!(
        "* Send some data to UART{} (don't forget to press Enter) *",
        pins::ECHO_UART_PORT
    );

    // ── 6. Event loop ─────────────────────────────────────────
    #[cfg(not(target_os = "espidf"))]
    let mut heartbeat_elapsed_ms: u32 = 0;

    loop {
        // Simulate timer ticks via sleep on non-espidf targets. On real
        // hardware the esp_timer callbacks feed the queue and the main
        // task blocks in vTaskDelay between drains.
        #[cfg(not(target_os = "espidf"))]
        {
            std::thread::sleep(std::time::Duration::from_millis(u64::from(
                config.serial_poll_interval_ms,
            )));
            events::push_event(Event::SerialDataReady);
            heartbeat_elapsed_ms += config.serial_poll_interval_ms;
            if heartbeat_elapsed_ms >= config.heartbeat_interval_ms {
                events::push_event(Event::HeartbeatTick);
                heartbeat_elapsed_ms = 0;
            }
        }

        // Process all pending events.
        events::drain_events(|event| match event {
            Event::SerialDataReady => app.on_data_ready(&mut uart, &mut log_sink),
            Event::HeartbeatTick => app.on_heartbeat(&mut uart, &mut log_sink),
        });

        #[cfg(target_os = "espidf")]
        {
            // One-tick delay yields to the IDF timer task between drains.
            // SAFETY: plain FreeRTOS delay; no pointers involved.
            unsafe { esp_idf_svc::sys::vTaskDelay(1) };
        }
    }
}
