//! Class-file byte builders for tests.

/// Builds a constant pool (count followed by entries).
pub(crate) struct PoolBuilder {
    bytes: Vec<u8>,
    next: u16,
}

impl PoolBuilder {
    pub(crate) fn new() -> Self {
        Self {
            bytes: Vec::new(),
            next: 1,
        }
    }

    fn push(&mut self, entry: &[u8], slots: u16) -> u16 {
        let index = self.next;
        self.bytes.extend_from_slice(entry);
        self.next += slots;
        index
    }

    pub(crate) fn utf8(&mut self, s: &str) -> u16 {
        let mut entry = vec![1];
        entry.extend_from_slice(&(s.len() as u16).to_be_bytes());
        entry.extend_from_slice(s.as_bytes());
        self.push(&entry, 1)
    }

    pub(crate) fn class(&mut self, internal_name: &str) -> u16 {
        let name = self.utf8(internal_name);
        let mut entry = vec![7];
        entry.extend_from_slice(&name.to_be_bytes());
        self.push(&entry, 1)
    }

    pub(crate) fn name_and_type(&mut self, name: &str, descriptor: &str) -> u16 {
        let name = self.utf8(name);
        let descriptor = self.utf8(descriptor);
        let mut entry = vec![12];
        entry.extend_from_slice(&name.to_be_bytes());
        entry.extend_from_slice(&descriptor.to_be_bytes());
        self.push(&entry, 1)
    }

    pub(crate) fn method_type(&mut self, descriptor: &str) -> u16 {
        let descriptor = self.utf8(descriptor);
        let mut entry = vec![16];
        entry.extend_from_slice(&descriptor.to_be_bytes());
        self.push(&entry, 1)
    }

    pub(crate) fn string(&mut self, value: &str) -> u16 {
        let value = self.utf8(value);
        let mut entry = vec![8];
        entry.extend_from_slice(&value.to_be_bytes());
        self.push(&entry, 1)
    }

    pub(crate) fn long(&mut self, value: i64) -> u16 {
        let mut entry = vec![5];
        entry.extend_from_slice(&value.to_be_bytes());
        self.push(&entry, 2)
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        let mut out = self.next.to_be_bytes().to_vec();
        out.extend_from_slice(&self.bytes);
        out
    }
}

/// Builds a complete class file.
pub(crate) struct ClassBuilder {
    pub(crate) pool: PoolBuilder,
    this_class: u16,
    super_class: u16,
    interfaces: Vec<u16>,
    fields: Vec<(u16, u16)>,
    methods: Vec<(u16, u16)>,
}

impl ClassBuilder {
    pub(crate) fn new(this: &str, superclass: &str) -> Self {
        let mut pool = PoolBuilder::new();
        let this_class = pool.class(this);
        let super_class = pool.class(superclass);
        Self {
            pool,
            this_class,
            super_class,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub(crate) fn interface(mut self, name: &str) -> Self {
        let index = self.pool.class(name);
        self.interfaces.push(index);
        self
    }

    pub(crate) fn field(mut self, name: &str, descriptor: &str) -> Self {
        let name = self.pool.utf8(name);
        let descriptor = self.pool.utf8(descriptor);
        self.fields.push((name, descriptor));
        self
    }

    pub(crate) fn method(mut self, name: &str, descriptor: &str) -> Self {
        let name = self.pool.utf8(name);
        let descriptor = self.pool.utf8(descriptor);
        self.methods.push((name, descriptor));
        self
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&0xCAFE_BABEu32.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&52u16.to_be_bytes());
        out.extend_from_slice(&self.pool.finish());
        out.extend_from_slice(&0x0021u16.to_be_bytes());
        out.extend_from_slice(&self.this_class.to_be_bytes());
        out.extend_from_slice(&self.super_class.to_be_bytes());
        out.extend_from_slice(&(self.interfaces.len() as u16).to_be_bytes());
        for i in &self.interfaces {
            out.extend_from_slice(&i.to_be_bytes());
        }
        for members in [&self.fields, &self.methods] {
            out.extend_from_slice(&(members.len() as u16).to_be_bytes());
            for (name, descriptor) in members {
                out.extend_from_slice(&0x0001u16.to_be_bytes());
                out.extend_from_slice(&name.to_be_bytes());
                out.extend_from_slice(&descriptor.to_be_bytes());
                // one opaque attribute, to exercise attribute skipping
                out.extend_from_slice(&1u16.to_be_bytes());
                out.extend_from_slice(&name.to_be_bytes());
                out.extend_from_slice(&3u32.to_be_bytes());
                out.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
            }
        }
        // no class attributes
        out.extend_from_slice(&0u16.to_be_bytes());
        out
    }
}
