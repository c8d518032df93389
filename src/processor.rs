mod logic;

use crate::io::IoRegisters;
use crate::memory::{Framebuffer, WordMemory};
use crate::register::RegisterFile;
use crate::trace::Tracer;
use crate::{constants, register_index, InstrWord, Instruction, RegisterId, Word};
use std::io;

/// The complete simulated system: processor core, instruction and data
/// memory, disk, IO registers and the external IRQ2 schedule.
///
/// One call to [`step`](#method.step) is one cycle:
/// `{device tick -> fetch -> decode -> immediate writes -> trace ->
/// execute -> LED/display change detection -> cycle += 1}`. Given identical
/// images and schedule, two runs are byte identical.
pub struct Machine {
    registers: RegisterFile,
    pc: Word,
    halted: bool,
    in_interrupt: bool,
    cycle: u32,
    imem: Vec<InstrWord>,
    dmem: WordMemory,
    disk: WordMemory,
    io: IoRegisters,
    irq2_schedule: Vec<u32>,
    prev_leds: Word,
    prev_display: Word,
}

impl Machine {
    /// Constructs a machine from the three memory images and the IRQ2
    /// schedule. Short images are zero padded to the architectural sizes.
    pub fn new(
        imem: &[InstrWord],
        dmem: &[Word],
        disk: &[Word],
        irq2_schedule: Vec<u32>,
    ) -> Machine {
        let mut instructions = vec![0; constants::IMEM_SIZE];
        let count = imem.len().min(constants::IMEM_SIZE);
        instructions[..count].copy_from_slice(&imem[..count]);

        Machine {
            registers: RegisterFile::default(),
            pc: 0,
            halted: false,
            in_interrupt: false,
            cycle: 0,
            imem: instructions,
            dmem: WordMemory::load(constants::DMEM_SIZE, dmem),
            disk: WordMemory::load(constants::DISK_SIZE, disk),
            io: IoRegisters::new(),
            irq2_schedule,
            prev_leds: 0,
            prev_display: 0,
        }
    }

    /// Executes one cycle. Returns `false` once the machine has halted.
    pub fn step<T: Tracer>(&mut self, tracer: &mut T) -> io::Result<bool> {
        if self.halted {
            return Ok(false);
        }

        self.tick_devices();

        let word = self.imem[self.pc as usize] & constants::INSTR_MASK;
        let instruction = Instruction::decode(word);

        self.registers
            .set_immediates(instruction.imm1, instruction.imm2);
        tracer.instruction(self.pc, word, self.registers.as_slice())?;

        logic::execute(self, &instruction, tracer)?;

        if self.io.leds() != self.prev_leds {
            self.prev_leds = self.io.leds();
            tracer.leds(self.cycle, self.prev_leds)?;
        }
        if self.io.display7seg() != self.prev_display {
            self.prev_display = self.io.display7seg();
            tracer.display(self.cycle, self.prev_display)?;
        }

        self.cycle = self.cycle.wrapping_add(1);
        Ok(!self.halted)
    }

    /// Runs until `halt`, returning the cycle count.
    pub fn run<T: Tracer>(&mut self, tracer: &mut T) -> io::Result<u32> {
        while self.step(tracer)? {}
        Ok(self.cycle)
    }

    /// Advances the devices that act ahead of the fetch: the timer, the
    /// disk controller, the interrupt arbiter and the external IRQ2 line.
    ///
    /// The arbiter runs before the IRQ2 check, so an external interrupt
    /// scheduled for this cycle is taken at the next cycle's tick at the
    /// earliest.
    fn tick_devices(&mut self) {
        self.io.tick_timer();
        self.io.tick_disk(&mut self.dmem, &mut self.disk);

        if !self.in_interrupt && self.io.irq_pending() {
            self.io.irqreturn = self.pc;
            self.pc = self.io.irqhandler & constants::PC_MASK;
            self.in_interrupt = true;
        }

        if self.irq2_schedule.contains(&self.cycle) {
            self.io.irq_status[2] = 1;
        }
    }

    pub fn register(&self, id: RegisterId) -> Word {
        self.registers.get(register_index(id))
    }

    /// Direct access to a register slot, bypassing the zero guard. Intended
    /// for test setup.
    pub fn register_mut(&mut self, id: RegisterId) -> &mut Word {
        self.registers.get_mut(register_index(id))
    }

    pub fn registers(&self) -> &[Word] {
        self.registers.as_slice()
    }

    pub fn pc(&self) -> Word {
        self.pc
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn in_interrupt(&self) -> bool {
        self.in_interrupt
    }

    /// Cycles executed so far.
    pub fn cycles(&self) -> u32 {
        self.cycle
    }

    pub fn dmem(&self) -> &WordMemory {
        &self.dmem
    }

    pub fn disk(&self) -> &WordMemory {
        &self.disk
    }

    pub fn io(&self) -> &IoRegisters {
        &self.io
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        self.io.framebuffer()
    }
}
