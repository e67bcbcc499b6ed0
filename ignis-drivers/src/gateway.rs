//! Appliance gateways
//!
//! Compose the individual drivers into the [`SensorGateway`] and
//! [`ActuatorGateway`] the control loop runs against.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;

use ignis_core::traits::{ActuatorError, ActuatorGateway, SensorError, SensorGateway};

use crate::output::{GpioOutput, MainValve, StatusLedPair};
use crate::sensor::{AdcReader, Potentiometer, SwitchInput, ThermocoupleFlameSensor};

/// The four appliance inputs
pub struct ApplianceSensors<F, P, H, S> {
    flame: ThermocoupleFlameSensor<F>,
    setpoint: Potentiometer<P>,
    heat: SwitchInput<H>,
    safety: SwitchInput<S>,
}

impl<F, P, H, S> ApplianceSensors<F, P, H, S>
where
    F: AdcReader,
    P: AdcReader,
    H: InputPin,
    S: InputPin,
{
    pub fn new(
        flame: ThermocoupleFlameSensor<F>,
        setpoint: Potentiometer<P>,
        heat: SwitchInput<H>,
        safety: SwitchInput<S>,
    ) -> Self {
        Self {
            flame,
            setpoint,
            heat,
            safety,
        }
    }

    /// Filtered flame sensor level
    pub fn flame_level(&self) -> u16 {
        self.flame.level()
    }
}

impl<F, P, H, S> SensorGateway for ApplianceSensors<F, P, H, S>
where
    F: AdcReader,
    P: AdcReader,
    H: InputPin,
    S: InputPin,
{
    fn flame_detected(&mut self) -> Result<bool, SensorError> {
        self.flame.flame_detected()
    }

    fn potentiometer_setpoint(&mut self) -> Result<u8, SensorError> {
        self.setpoint.read_percent()
    }

    fn heat_requested(&mut self) -> Result<bool, SensorError> {
        self.heat.is_closed()
    }

    fn safety_ok(&mut self) -> Result<bool, SensorError> {
        self.safety.is_closed()
    }
}

/// The four appliance outputs
pub struct ApplianceActuators<PV, IG, MV, G, R> {
    pilot: GpioOutput<PV>,
    igniter: GpioOutput<IG>,
    main_valve: MainValve<MV>,
    status: StatusLedPair<G, R>,
}

impl<PV, IG, MV, G, R> ApplianceActuators<PV, IG, MV, G, R>
where
    PV: OutputPin,
    IG: OutputPin,
    MV: SetDutyCycle,
    G: OutputPin,
    R: OutputPin,
{
    pub fn new(
        pilot: GpioOutput<PV>,
        igniter: GpioOutput<IG>,
        main_valve: MainValve<MV>,
        status: StatusLedPair<G, R>,
    ) -> Self {
        Self {
            pilot,
            igniter,
            main_valve,
            status,
        }
    }

    /// Main valve pulse width currently applied (µs)
    pub fn main_valve_pulse_us(&self) -> u16 {
        self.main_valve.pulse_us()
    }
}

impl<PV, IG, MV, G, R> ActuatorGateway for ApplianceActuators<PV, IG, MV, G, R>
where
    PV: OutputPin,
    IG: OutputPin,
    MV: SetDutyCycle,
    G: OutputPin,
    R: OutputPin,
{
    fn set_pilot_valve(&mut self, open: bool) -> Result<(), ActuatorError> {
        self.pilot.set_on(open)
    }

    fn set_igniter(&mut self, on: bool) -> Result<(), ActuatorError> {
        self.igniter.set_on(on)
    }

    fn set_main_valve(&mut self, percent: u8) -> Result<(), ActuatorError> {
        self.main_valve.set_percent(percent)
    }

    fn set_status(&mut self, green: bool, red: bool) -> Result<(), ActuatorError> {
        self.status.set(green, red)
    }
}
