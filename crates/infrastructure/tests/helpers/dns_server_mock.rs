use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock answers every query it receives.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// NOERROR with one A record per address.
    Answer { addrs: Vec<Ipv4Addr>, ttl: u32 },
    /// UDP answers carry TC and nothing else; TCP answers in full.
    TruncateUdp { addrs: Vec<Ipv4Addr>, ttl: u32 },
    /// Empty answer with the given RCODE.
    Rcode(u8),
    /// Valid answer under a different message ID.
    WrongId,
    /// Never answers.
    Silent,
}

/// UDP + TCP DNS responder on one loopback port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: Behavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = respond(&buf[..len], &behavior, false) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                continue;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                continue;
                            }
                            if let Some(response) = respond(&query, &behavior, true) {
                                let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&response).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn respond(query: &[u8], behavior: &Behavior, over_tcp: bool) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }

    match behavior {
        Behavior::Answer { addrs, ttl } => Some(build_response(query, 0, false, addrs, *ttl)),
        Behavior::TruncateUdp { addrs, ttl } if over_tcp => {
            Some(build_response(query, 0, false, addrs, *ttl))
        }
        Behavior::TruncateUdp { .. } => Some(build_response(query, 0, true, &[], 0)),
        Behavior::Rcode(rcode) => Some(build_response(query, *rcode, false, &[], 0)),
        Behavior::WrongId => {
            let mut response =
                build_response(query, 0, false, &[Ipv4Addr::new(192, 0, 2, 1)], 60);
            response[0] ^= 0xff;
            Some(response)
        }
        Behavior::Silent => None,
    }
}

fn build_response(
    query: &[u8],
    rcode: u8,
    truncated: bool,
    addrs: &[Ipv4Addr],
    ttl: u32,
) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);

    response.extend_from_slice(&query[0..2]);

    // QR, opcode QUERY, TC as requested, RD echoed
    let tc = if truncated { 0x02 } else { 0x00 };
    response.push(0x80 | tc | (query[2] & 0x01));
    // RA plus RCODE
    response.push(0x80 | (rcode & 0x0f));

    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(addrs.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    // question section echoed from the query
    response.extend_from_slice(&query[12..]);

    for addr in addrs {
        response.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
        response.extend_from_slice(&ttl.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x04]);
        response.extend_from_slice(&addr.octets());
    }

    response
}
