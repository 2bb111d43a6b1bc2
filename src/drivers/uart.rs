//! UART peripheral driver for the echo channel.
//!
//! Configures the UART with raw ESP-IDF sys calls and exposes it as a
//! [`ByteChannel`]. Reads are non-blocking (zero tick timeout); the IDF
//! driver buffers inbound bytes in its own ring buffer, which is what
//! `rx_available()` reports. On simulation targets every operation is a
//! successful no-op so the domain layer runs unchanged on the host.

use log::info;

use crate::app::ports::ByteChannel;
#[cfg(target_os = "espidf")]
use crate::config::{Parity, StopBits};
use crate::config::UartSettings;
use crate::error::{Error, Result};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// IDF driver ring buffer sizes. RX must exceed the hardware FIFO (128).
#[cfg(target_os = "espidf")]
const RX_BUF_SIZE: i32 = 512;
#[cfg(target_os = "espidf")]
const TX_BUF_SIZE: i32 = 512;

/// Handle to a configured echo UART.
pub struct EchoUart {
    port: u8,
}

impl EchoUart {
    /// Configure the peripheral and install the IDF driver.
    ///
    /// Fails if the settings are rejected or the driver cannot be
    /// installed. A failure here is fatal to startup — the caller must
    /// not register any callbacks for an unconfigured port.
    #[cfg(target_os = "espidf")]
    pub fn configure(port: u8, settings: &UartSettings) -> Result<Self> {
        let cfg = uart_config_t {
            baud_rate: settings.baud_rate as i32,
            data_bits: match settings.data_bits {
                5 => uart_word_length_t_UART_DATA_5_BITS,
                6 => uart_word_length_t_UART_DATA_6_BITS,
                7 => uart_word_length_t_UART_DATA_7_BITS,
                8 => uart_word_length_t_UART_DATA_8_BITS,
                _ => return Err(Error::Config("unsupported data bits")),
            },
            parity: match settings.parity {
                Parity::None => uart_parity_t_UART_PARITY_DISABLE,
                Parity::Even => uart_parity_t_UART_PARITY_EVEN,
                Parity::Odd => uart_parity_t_UART_PARITY_ODD,
            },
            stop_bits: match settings.stop_bits {
                StopBits::One => uart_stop_bits_t_UART_STOP_BITS_1,
                StopBits::Two => uart_stop_bits_t_UART_STOP_BITS_2,
            },
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            rx_flow_ctrl_thresh: 0,
            ..Default::default()
        };

        // SAFETY: called once from the single main task before the event
        // loop starts; `cfg` outlives the call.
        let ret = unsafe { uart_param_config(port as i32, &cfg) };
        if ret != ESP_OK {
            return Err(Error::Config("uart parameter config rejected"));
        }

        let ret = unsafe {
            uart_set_pin(
                port as i32,
                crate::pins::UART_TX_GPIO,
                crate::pins::UART_RX_GPIO,
                UART_PIN_NO_CHANGE,
                UART_PIN_NO_CHANGE,
            )
        };
        if ret != ESP_OK {
            return Err(Error::Config("uart pin assignment rejected"));
        }

        let ret = unsafe {
            uart_driver_install(
                port as i32,
                RX_BUF_SIZE,
                TX_BUF_SIZE,
                0,
                core::ptr::null_mut(),
                0,
            )
        };
        if ret != ESP_OK {
            return Err(Error::Init("uart driver install failed"));
        }

        info!(
            "uart: UART{} configured ({} baud, {} data bits)",
            port, settings.baud_rate, settings.data_bits
        );
        Ok(Self { port })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn configure(port: u8, settings: &UartSettings) -> Result<Self> {
        info!(
            "uart(sim): UART{} configured ({} baud, no hardware)",
            port, settings.baud_rate
        );
        Ok(Self { port })
    }

    /// Port number this driver is bound to.
    pub fn port(&self) -> u8 {
        self.port
    }
}

impl ByteChannel for EchoUart {
    type Error = Error;

    fn rx_available(&self) -> usize {
        #[cfg(target_os = "espidf")]
        {
            let mut len: usize = 0;
            // SAFETY: driver installed in configure(); read-only query.
            let ret = unsafe { uart_get_buffered_data_len(self.port as i32, &mut len) };
            if ret != ESP_OK {
                return 0;
            }
            len
        }
        #[cfg(not(target_os = "espidf"))]
        {
            0
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        #[cfg(target_os = "espidf")]
        {
            // Zero tick timeout: return whatever the driver has buffered.
            // SAFETY: buf is valid for buf.len() writable bytes.
            let ret = unsafe {
                uart_read_bytes(
                    self.port as i32,
                    buf.as_mut_ptr().cast(),
                    buf.len() as u32,
                    0,
                )
            };
            if ret < 0 {
                return Err(Error::Channel("uart read failed"));
            }
            Ok(ret as usize)
        }
        #[cfg(not(target_os = "espidf"))]
        {
            let _ = buf;
            Ok(0)
        }
    }

    fn write(&mut self, data: &[u8]) -> Result<usize> {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: data is valid for data.len() readable bytes; the IDF
            // driver copies into its TX ring buffer before returning.
            let ret = unsafe {
                uart_write_bytes(self.port as i32, data.as_ptr().cast(), data.len())
            };
            if ret < 0 {
                return Err(Error::Channel("uart write failed"));
            }
            Ok(ret as usize)
        }
        #[cfg(not(target_os = "espidf"))]
        {
            Ok(data.len())
        }
    }

    fn flush(&mut self) -> Result<()> {
        // The IDF driver task drains the TX ring buffer on its own;
        // nothing to force here.
        Ok(())
    }
}
