#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Timer};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use esp_hal::Async;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::timg::TimerGroup;
use log::{LevelFilter, info, warn};

// Display-LCD panel specific imports
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use mipidsi::interface::SpiInterface;
use mipidsi::{Builder as MipidsiBuilder, models::ILI9342CRgb565};

use velo_core::config::{
    DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, FRAME_INTERVAL_MS, TOUCH_POLL_INTERVAL_MS,
};
use velo_core::screens::ScreenManager;
use velo_core::ui::TouchEvent;
use velo_firmware::touch::Ft6336u;

/// Touch events captured by the touch task, drained by the UI loop every
/// frame. Events are dropped rather than queued when the UI falls behind.
static TOUCH_EVENTS: Channel<CriticalSectionRawMutex, TouchEvent, 8> = Channel::new();

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    esp_println::println!("PANIC: {}", info);
    loop {}
}

extern crate alloc;

// This creates a default app-descriptor required by the esp-idf bootloader.
esp_bootloader_esp_idf::esp_app_desc!();

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: 73744);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    info!("embassy initialized");

    // Configure and initialize the display

    // 1. Configure SPI bus
    let spi_bus = Spi::new(peripherals.SPI2, SpiConfig::default())
        .unwrap()
        .with_sck(peripherals.GPIO36)
        .with_mosi(peripherals.GPIO37);

    // 2. Create a dummy CS pin (we don't use hardware CS for this display)
    let cs = Output::new(peripherals.GPIO35, Level::High, OutputConfig::default());

    // 3. Wrap the SPI bus as a SPI device (required by embedded-hal traits)
    let spi_device = ExclusiveDevice::new_no_delay(spi_bus, cs).unwrap();

    // 4. Set up DC (Data/Command) pin
    let dc = Output::new(peripherals.GPIO34, Level::Low, OutputConfig::default());

    // 5. Create a buffer for SPI batching (larger = faster, uses more RAM)
    let mut spi_buffer = [0u8; 512];

    // 6. Create display interface
    let di = SpiInterface::new(spi_device, dc, &mut spi_buffer);

    // 7. Build and initialize the display driver
    let mut display = MipidsiBuilder::new(ILI9342CRgb565, di)
        .display_size(DISPLAY_WIDTH_PX as u16, DISPLAY_HEIGHT_PX as u16)
        .init(&mut embassy_time::Delay)
        .expect("Failed to initialize display");

    info!("display initialized");

    // Touch controller on the system I2C bus
    let i2c = I2c::new(peripherals.I2C0, I2cConfig::default())
        .unwrap()
        .with_sda(peripherals.GPIO12)
        .with_scl(peripherals.GPIO11)
        .into_async();

    spawner.spawn(touch_task(Ft6336u::new(i2c))).ok();

    let bounds = Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let mut manager = ScreenManager::with_default_screens(bounds);

    info!("entering UI loop");

    loop {
        while let Ok(event) = TOUCH_EVENTS.try_receive() {
            manager.handle_touch(event);
        }

        let now_ms = Instant::now().as_millis();
        manager.update(now_ms);

        if manager.is_dirty() && manager.draw(&mut display, now_ms).is_err() {
            warn!("display draw failed");
        }

        Timer::after(Duration::from_millis(FRAME_INTERVAL_MS)).await;
    }
}

#[embassy_executor::task]
async fn touch_task(mut touch: Ft6336u<I2c<'static, Async>>) {
    match touch.probe().await {
        Ok(()) => info!("touch controller online"),
        Err(e) => warn!("touch controller probe failed: {:?}", e),
    }

    loop {
        let now_ms = Instant::now().as_millis();
        match touch.poll(now_ms).await {
            Ok(Some(event)) => {
                // Drop on overflow; stale touch input is worse than none
                TOUCH_EVENTS.try_send(event).ok();
            }
            Ok(None) => {}
            Err(e) => warn!("touch poll failed: {:?}", e),
        }

        Timer::after(Duration::from_millis(TOUCH_POLL_INTERVAL_MS)).await;
    }
}
