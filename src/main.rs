#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rtic::app;

#[app(device = rp_pico::hal::pac, peripherals = true, dispatchers = [I2C0_IRQ])]
mod app {
    use embedded_hal::digital::v2::{InputPin, OutputPin, ToggleableOutputPin};
    use fiftyeight::button::RepeatDelay;
    use fiftyeight::config::{FaceConfig, START_TIME};
    use fiftyeight::display::SharpMemoryDisplay;
    use fiftyeight::framebuffer::FrameBuffer;
    use fiftyeight::{redraw, ClockState, Resources};
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::{ExtU32, RateExtU32},
        gpio::{bank0::Gpio15, FunctionSio, Pin, PullUp, SioInput},
        sio::Sio,
        spi::Spi,
        timer::{Alarm, Alarm0, Timer},
        watchdog::Watchdog,
    };

    type Spi0 = Spi<
        rp_pico::hal::spi::Enabled,
        rp_pico::hal::pac::SPI0,
        (
            Pin<rp_pico::hal::gpio::bank0::Gpio19, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
            Pin<rp_pico::hal::gpio::bank0::Gpio16, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
            Pin<rp_pico::hal::gpio::bank0::Gpio18, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        ),
    >;
    type CsPin = Pin<
        rp_pico::hal::gpio::bank0::Gpio17,
        rp_pico::hal::gpio::FunctionSio<rp_pico::hal::gpio::SioOutput>,
        rp_pico::hal::gpio::PullDown,
    >;
    type Panel = SharpMemoryDisplay<Spi0, CsPin>;
    type LedPin = Pin<
        rp_pico::hal::gpio::bank0::Gpio25,
        rp_pico::hal::gpio::FunctionSio<rp_pico::hal::gpio::SioOutput>,
        rp_pico::hal::gpio::PullDown,
    >;

    #[shared]
    struct Shared {
        clock: ClockState,
        button: Pin<Gpio15, FunctionSio<SioInput>, PullUp>,
        alarm1: rp_pico::hal::timer::Alarm1,
        repeat: RepeatDelay,
    }

    #[local]
    struct Local {
        panel: Panel,
        framebuffer: FrameBuffer,
        resources: Resources<'static>,
        led: LedPin,
        alarm: Alarm0,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let external_xtal_freq_hz = 12_000_000u32;
        let clocks = init_clocks_and_plls(
            external_xtal_freq_hz,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        alarm.schedule(1_000_000u32.micros()).unwrap();
        alarm.enable_interrupt();

        let mut alarm1 = timer.alarm_1().unwrap();
        alarm1.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();
        let button = pins.gpio15.into_pull_up_input();
        button.set_interrupt_enabled(rp_pico::hal::gpio::Interrupt::EdgeLow, true);

        let mosi = pins.gpio19.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let sck = pins.gpio18.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let miso = pins.gpio16.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let mut cs = pins.gpio17.into_push_pull_output();
        cs.set_low().unwrap();

        let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, miso, sck));
        let spi = spi.init(
            &mut pac.RESETS,
            clocks.peripheral_clock.freq(),
            1_000_000u32.Hz(),
            &embedded_hal::spi::MODE_0,
        );

        let mut panel = SharpMemoryDisplay::new(spi, cs);
        if panel.clear().is_err() {
            defmt::error!("panel clear failed");
        }

        let resources = Resources::bundled();
        let missing = resources.log_summary();
        if missing > 0 {
            defmt::warn!("{} sprite sheets missing, face will be partial", missing);
        }

        let (hours, mins, secs) = START_TIME;
        update_display::spawn(true).ok();

        (
            Shared {
                clock: ClockState::new(hours, mins, secs),
                button,
                alarm1,
                repeat: RepeatDelay::new(),
            },
            Local {
                panel,
                framebuffer: FrameBuffer::new(),
                resources,
                led,
                alarm,
            },
            init::Monotonics(),
        )
    }

    // 1 Hz tick: redraw on minute changes, otherwise just refresh VCOM.
    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [clock], local = [alarm, led])]
    fn timer_tick(mut ctx: timer_tick::Context) {
        ctx.local.alarm.clear_interrupt();
        ctx.local.alarm.schedule(1_000_000u32.micros()).ok();

        ctx.local.led.toggle().ok();

        let minute_changed = ctx.shared.clock.lock(|c| c.tick());
        update_display::spawn(minute_changed).ok();
    }

    #[task(binds = IO_IRQ_BANK0, priority = 1, shared = [clock, button, alarm1, repeat])]
    fn button_press(mut ctx: button_press::Context) {
        // Disable interrupt to prevent bouncing re-entry
        ctx.shared.button.lock(|b| {
            b.set_interrupt_enabled(rp_pico::hal::gpio::Interrupt::EdgeLow, false);
            b.clear_interrupt(rp_pico::hal::gpio::Interrupt::EdgeLow);
        });

        ctx.shared.clock.lock(|c| c.add_minute());
        update_display::spawn(true).ok();

        let delay = ctx.shared.repeat.lock(|r| r.reset());
        ctx.shared.alarm1.lock(|a| {
            a.clear_interrupt();
            a.schedule(delay.micros()).ok();
        });
    }

    #[task(binds = TIMER_IRQ_1, priority = 1, shared = [clock, button, alarm1, repeat])]
    fn button_repeat(mut ctx: button_repeat::Context) {
        ctx.shared.alarm1.lock(|a| a.clear_interrupt());

        let is_held = ctx.shared.button.lock(|b| b.is_low().unwrap_or(false));
        if is_held {
            ctx.shared.clock.lock(|c| c.add_minute());
            update_display::spawn(true).ok();

            let delay = ctx.shared.repeat.lock(|r| r.accelerate());
            ctx.shared.alarm1.lock(|a| {
                a.schedule(delay.micros()).ok();
            });
        } else {
            ctx.shared.button.lock(|b| {
                // Drop edges latched while bouncing, then re-arm.
                b.clear_interrupt(rp_pico::hal::gpio::Interrupt::EdgeLow);
                b.set_interrupt_enabled(rp_pico::hal::gpio::Interrupt::EdgeLow, true);
            });
        }
    }

    #[task(shared = [clock], local = [panel, framebuffer, resources], capacity = 4)]
    fn update_display(mut ctx: update_display::Context, full: bool) {
        let panel = ctx.local.panel;
        if !full {
            if panel.hold().is_err() {
                defmt::error!("panel VCOM refresh failed");
            }
            return;
        }

        let time = ctx.shared.clock.lock(|c| c.time_of_day());
        let framebuffer = ctx.local.framebuffer;
        let resources = ctx.local.resources;
        let report = match redraw(&mut *framebuffer, time, &FaceConfig::DEFAULT, resources) {
            Ok(report) => report,
            Err(never) => match never {},
        };
        if !report.is_complete() {
            defmt::warn!(
                "{} of {} draw commands skipped",
                report.skipped.len(),
                report.drawn + report.skipped.len()
            );
        }

        if let Err(e) = panel.write_frame(&*framebuffer) {
            defmt::error!("panel write failed: {}", e);
        }
    }
}
