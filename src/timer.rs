use std::time::Instant;

pub struct Timer{
    time: Instant,
    prev: u128,
}

impl Timer{
    pub fn new() -> Self{
        let time = Instant::now();
        let prev = time.elapsed().as_millis();
        Self{ time, prev }
    }

    /// Milliseconds since the last checkpoint.
    pub fn elapsed(&self) -> u128{
        self.time.elapsed().as_millis() - self.prev
    }

    pub fn checkpoint(&mut self){
        self.prev = self.time.elapsed().as_millis();
    }

    /// Log the time spent in `phase` and start a new one.
    pub fn lap(&mut self, phase: &str){
        log::debug!("{phase}: {:?}ms", self.elapsed());
        self.checkpoint();
    }

    pub fn total(&self) -> u128{
        self.time.elapsed().as_millis()
    }
}

impl Default for Timer{
    fn default() -> Self{
        Self::new()
    }
}
