use crate::memory::{Framebuffer, WordMemory};
use crate::{constants, Word};
use num_derive::{FromPrimitive, ToPrimitive};

/// The 23 memory-mapped IO registers.
///
/// The discriminants are the port numbers used by the `in` and `out`
/// instructions. Ports 18 and 19 are reserved: they read as zero and ignore
/// writes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum IoRegister {
    Irq0Enable,
    Irq1Enable,
    Irq2Enable,
    Irq0Status,
    Irq1Status,
    Irq2Status,
    IrqHandler,
    IrqReturn,
    Clks,
    Leds,
    Display7Seg,
    TimerEnable,
    TimerCurrent,
    TimerMax,
    DiskCmd,
    DiskSector,
    DiskBuffer,
    DiskStatus,
    Reserved0,
    Reserved1,
    MonitorAddr,
    MonitorData,
    MonitorCmd,
}

impl IoRegister {
    /// The name used in the hardware register trace.
    pub fn name(self) -> &'static str {
        match self {
            IoRegister::Irq0Enable => "irq0enable",
            IoRegister::Irq1Enable => "irq1enable",
            IoRegister::Irq2Enable => "irq2enable",
            IoRegister::Irq0Status => "irq0status",
            IoRegister::Irq1Status => "irq1status",
            IoRegister::Irq2Status => "irq2status",
            IoRegister::IrqHandler => "irqhandler",
            IoRegister::IrqReturn => "irqreturn",
            IoRegister::Clks => "clks",
            IoRegister::Leds => "leds",
            IoRegister::Display7Seg => "display7seg",
            IoRegister::TimerEnable => "timerenable",
            IoRegister::TimerCurrent => "timercurrent",
            IoRegister::TimerMax => "timermax",
            IoRegister::DiskCmd => "diskcmd",
            IoRegister::DiskSector => "disksector",
            IoRegister::DiskBuffer => "diskbuffer",
            IoRegister::DiskStatus => "diskstatus",
            IoRegister::Reserved0 => "reserved0",
            IoRegister::Reserved1 => "reserved1",
            IoRegister::MonitorAddr => "monitoraddr",
            IoRegister::MonitorData => "monitordata",
            IoRegister::MonitorCmd => "monitorcmd",
        }
    }
}

impl std::fmt::Display for IoRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// State behind the IO ports: interrupt lines, timer, disk controller,
/// LEDs, seven-segment display and the monitor.
///
/// Reads and writes go through [`read`](#method.read) and
/// [`write`](#method.write), which implement the side effects of the
/// command ports. The timer and disk engines advance once per cycle through
/// the machine's device tick.
#[derive(Clone, Debug)]
pub struct IoRegisters {
    pub(crate) irq_enable: [Word; 3],
    pub(crate) irq_status: [Word; 3],
    pub(crate) irqhandler: Word,
    pub(crate) irqreturn: Word,
    leds: Word,
    display7seg: Word,
    timerenable: Word,
    timercurrent: Word,
    timermax: Word,
    diskcmd: Word,
    disksector: Word,
    diskbuffer: Word,
    diskstatus: Word,
    disk_busy: u32,
    monitoraddr: Word,
    monitordata: Word,
    framebuffer: Framebuffer,
}

impl IoRegisters {
    pub fn new() -> IoRegisters {
        IoRegisters {
            irq_enable: [0; 3],
            irq_status: [0; 3],
            irqhandler: 0,
            irqreturn: 0,
            leds: 0,
            display7seg: 0,
            timerenable: 0,
            timercurrent: 0,
            timermax: 0,
            diskcmd: 0,
            disksector: 0,
            diskbuffer: 0,
            diskstatus: 0,
            disk_busy: 0,
            monitoraddr: 0,
            monitordata: 0,
            framebuffer: Framebuffer::new(),
        }
    }

    /// Reads a port. `cycle` backs the free-running `clks` counter.
    pub fn read(&self, register: IoRegister, cycle: u32) -> Word {
        match register {
            IoRegister::Irq0Enable => self.irq_enable[0],
            IoRegister::Irq1Enable => self.irq_enable[1],
            IoRegister::Irq2Enable => self.irq_enable[2],
            IoRegister::Irq0Status => self.irq_status[0],
            IoRegister::Irq1Status => self.irq_status[1],
            IoRegister::Irq2Status => self.irq_status[2],
            IoRegister::IrqHandler => self.irqhandler,
            IoRegister::IrqReturn => self.irqreturn,
            IoRegister::Clks => cycle,
            IoRegister::Leds => self.leds,
            IoRegister::Display7Seg => self.display7seg,
            IoRegister::TimerEnable => self.timerenable,
            IoRegister::TimerCurrent => self.timercurrent,
            IoRegister::TimerMax => self.timermax,
            IoRegister::DiskCmd => self.diskcmd,
            IoRegister::DiskSector => self.disksector,
            IoRegister::DiskBuffer => self.diskbuffer,
            IoRegister::DiskStatus => self.diskstatus,
            IoRegister::Reserved0 | IoRegister::Reserved1 => 0,
            IoRegister::MonitorAddr => self.monitoraddr,
            IoRegister::MonitorData => self.monitordata,
            // The monitor command port is write-only; nothing is stored.
            IoRegister::MonitorCmd => 0,
        }
    }

    /// Writes a port, applying the side effects of the command ports.
    pub fn write(&mut self, register: IoRegister, value: Word) {
        match register {
            IoRegister::Irq0Enable => self.irq_enable[0] = value & 1,
            IoRegister::Irq1Enable => self.irq_enable[1] = value & 1,
            IoRegister::Irq2Enable => self.irq_enable[2] = value & 1,
            IoRegister::Irq0Status => self.irq_status[0] = value & 1,
            IoRegister::Irq1Status => self.irq_status[1] = value & 1,
            IoRegister::Irq2Status => self.irq_status[2] = value & 1,
            IoRegister::IrqHandler => self.irqhandler = value,
            IoRegister::IrqReturn => self.irqreturn = value,
            // The cycle counter is free running.
            IoRegister::Clks => {}
            IoRegister::Leds => self.leds = value,
            IoRegister::Display7Seg => self.display7seg = value,
            IoRegister::TimerEnable => self.timerenable = value & 1,
            IoRegister::TimerCurrent => self.timercurrent = value,
            IoRegister::TimerMax => self.timermax = value,
            IoRegister::DiskCmd => {
                self.diskcmd = value;
                if value == 1 || value == 2 {
                    self.diskstatus = 1;
                    self.disk_busy = 0;
                }
            }
            IoRegister::DiskSector => self.disksector = value,
            IoRegister::DiskBuffer => self.diskbuffer = value,
            IoRegister::DiskStatus => self.diskstatus = value,
            IoRegister::Reserved0 | IoRegister::Reserved1 => {}
            IoRegister::MonitorAddr => self.monitoraddr = value,
            IoRegister::MonitorData => self.monitordata = value & 0xFF,
            IoRegister::MonitorCmd => {
                if value == 1 {
                    self.framebuffer
                        .set_pixel(self.monitoraddr, self.monitordata as u8);
                }
            }
        }
    }

    /// Advances the timer by one cycle. Reaching `timermax` asserts IRQ0 and
    /// restarts the count.
    pub(crate) fn tick_timer(&mut self) {
        if self.timerenable != 0 {
            self.timercurrent = self.timercurrent.wrapping_add(1);
            if self.timercurrent >= self.timermax {
                self.irq_status[0] = 1;
                self.timercurrent = 0;
            }
        }
    }

    /// Advances the disk controller by one cycle. After
    /// [`DISK_LATENCY_CYCLES`](../constants/constant.DISK_LATENCY_CYCLES.html)
    /// busy cycles the pending sector transfer happens atomically, the
    /// controller goes idle and IRQ1 is asserted.
    pub(crate) fn tick_disk(&mut self, dmem: &mut WordMemory, disk: &mut WordMemory) {
        if self.diskstatus == 0 {
            return;
        }

        self.disk_busy += 1;
        if self.disk_busy < constants::DISK_LATENCY_CYCLES {
            return;
        }

        let sector_base = self.disksector.wrapping_mul(constants::SECTOR_WORDS as Word);
        for i in 0..constants::SECTOR_WORDS as Word {
            match self.diskcmd {
                1 => {
                    if let Some(word) = disk.get(sector_base.wrapping_add(i)) {
                        dmem.set(self.diskbuffer.wrapping_add(i), word);
                    }
                }
                2 => {
                    if let Some(word) = dmem.get(self.diskbuffer.wrapping_add(i)) {
                        disk.set(sector_base.wrapping_add(i), word);
                    }
                }
                _ => {}
            }
        }

        self.diskstatus = 0;
        self.diskcmd = 0;
        self.disk_busy = 0;
        self.irq_status[1] = 1;
    }

    /// True when any interrupt line is both enabled and asserted.
    pub(crate) fn irq_pending(&self) -> bool {
        (self.irq_enable[0] & self.irq_status[0])
            | (self.irq_enable[1] & self.irq_status[1])
            | (self.irq_enable[2] & self.irq_status[2])
            != 0
    }

    pub fn leds(&self) -> Word {
        self.leds
    }

    pub fn display7seg(&self) -> Word {
        self.display7seg
    }

    pub fn irqreturn(&self) -> Word {
        self.irqreturn
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }
}

impl Default for IoRegisters {
    fn default() -> IoRegisters {
        IoRegisters::new()
    }
}
