//! Pin and peripheral assignments for the echo demo board.

/// UART port carrying the echo protocol. UART0 stays reserved for the
/// console logger — writing echo traffic there would interleave with
/// debug output.
pub const ECHO_UART_PORT: u8 = 1;

/// UART1 TX pin.
pub const UART_TX_GPIO: i32 = 17;

/// UART1 RX pin.
pub const UART_RX_GPIO: i32 = 16;
