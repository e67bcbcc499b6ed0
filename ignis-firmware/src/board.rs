//! Board wiring
//!
//! Pin assignments for the reference RP2040 controller board:
//!
//! | Signal           | Pin    | Notes                               |
//! |------------------|--------|-------------------------------------|
//! | Thermostat       | GPIO14 | input, pull-up, closed = low        |
//! | Safety switch    | GPIO15 | input, pull-up, closed (safe) = low |
//! | Pilot valve      | GPIO16 | output, active-high                 |
//! | Igniter          | GPIO17 | output, active-high                 |
//! | Green LED        | GPIO18 | output, active-high                 |
//! | Red LED          | GPIO19 | output, active-high                 |
//! | Main valve servo | GPIO20 | PWM slice 2 channel A               |
//! | Thermocouple amp | GPIO26 | ADC0                                |
//! | Setpoint pot     | GPIO27 | ADC1                                |

use core::cell::RefCell;

use defmt::*;
use embassy_rp::adc::{self, Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{self, Pwm, PwmOutput};
use embassy_rp::Peripherals;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use static_cell::StaticCell;

use ignis_core::config::ApplianceConfig;
use ignis_core::control::ControlLoop;
use ignis_core::time::AtomicTimeBase;
use ignis_drivers::output::{GpioOutput, MainValve, StatusLedPair};
use ignis_drivers::sensor::{
    AdcError, AdcReader, Potentiometer, SwitchInput, ThermocoupleFlameSensor,
};
use ignis_drivers::{ApplianceActuators, ApplianceSensors};

/// PWM clock divider: 125 MHz system clock to 1 MHz (one count per µs)
const PWM_DIVIDER: u8 = 125;

/// ADC shared by the flame sensor and the potentiometer
pub type SharedAdc = Mutex<CriticalSectionRawMutex, RefCell<Adc<'static, Blocking>>>;

static ADC: StaticCell<SharedAdc> = StaticCell::new();

/// One ADC input on the shared converter
pub struct SharedAdcChannel {
    adc: &'static SharedAdc,
    channel: Channel<'static>,
}

impl SharedAdcChannel {
    pub fn new(adc: &'static SharedAdc, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for SharedAdcChannel {
    fn read(&mut self) -> Result<u16, AdcError> {
        self.adc.lock(|adc| {
            let mut adc = adc.try_borrow_mut().map_err(|_| AdcError::NotReady)?;
            adc.blocking_read(&mut self.channel)
                .map_err(|_| AdcError::Conversion)
        })
    }
}

pub type BoardSensors =
    ApplianceSensors<SharedAdcChannel, SharedAdcChannel, Input<'static>, Input<'static>>;

pub type BoardActuators = ApplianceActuators<
    Output<'static>,
    Output<'static>,
    PwmOutput<'static>,
    Output<'static>,
    Output<'static>,
>;

/// Control loop running on this board
pub type ApplianceLoop = ControlLoop<&'static AtomicTimeBase, BoardSensors, BoardActuators>;

/// Configure every appliance pin and assemble the control loop
///
/// Outputs come up de-energized: valves closed, igniter off, LEDs dark.
pub fn build(
    p: Peripherals,
    config: &ApplianceConfig,
    clock: &'static AtomicTimeBase,
) -> ApplianceLoop {
    // Analog inputs
    let adc: &'static SharedAdc = ADC.init(Mutex::new(RefCell::new(Adc::new_blocking(
        p.ADC,
        adc::Config::default(),
    ))));
    let flame_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let pot_channel = Channel::new_pin(p.PIN_27, Pull::None);

    let sensors = ApplianceSensors::new(
        ThermocoupleFlameSensor::new(
            SharedAdcChannel::new(adc, flame_channel),
            config.flame_sensor,
        ),
        Potentiometer::new(
            SharedAdcChannel::new(adc, pot_channel),
            config.potentiometer,
        ),
        SwitchInput::new_active_low(Input::new(p.PIN_14, Pull::Up)),
        SwitchInput::new_active_low(Input::new(p.PIN_15, Pull::Up)),
    );
    info!("Inputs initialized");

    // Main valve servo PWM
    let valve = &config.main_valve;
    let mut pwm_config = pwm::Config::default();
    pwm_config.divider = PWM_DIVIDER.into();
    pwm_config.top = valve.period_us.saturating_sub(1);
    pwm_config.compare_a = valve.min_pulse_us;
    let pwm = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_20, pwm_config);
    let (main_valve_pwm, _) = pwm.split();
    let main_valve_pwm = unwrap!(main_valve_pwm);

    let actuators = ApplianceActuators::new(
        GpioOutput::new_active_high(Output::new(p.PIN_16, Level::Low)),
        GpioOutput::new_active_high(Output::new(p.PIN_17, Level::Low)),
        MainValve::new(main_valve_pwm, *valve),
        StatusLedPair::new(
            GpioOutput::new_active_high(Output::new(p.PIN_18, Level::Low)),
            GpioOutput::new_active_high(Output::new(p.PIN_19, Level::Low)),
        ),
    );
    info!(
        "Outputs initialized, main valve {}-{} us every {} us",
        valve.min_pulse_us, valve.max_pulse_us, valve.period_us
    );

    ControlLoop::new(clock, sensors, actuators, config.timing)
}
