use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use mcpi_link::args;
use mcpi_link::channel::{ChannelError, CommandChannel, Endpoint};
use mcpi_link::protocol::{flatten, Arg, CommandLine};
use mcpi_link::types::Vec3;

async fn listen() -> (TcpListener, Endpoint) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().unwrap().port();
    (listener, Endpoint::new("127.0.0.1", port))
}

/// Minimal peer: forwards every received line and answers `*.get*` commands.
fn spawn_peer(listener: TcpListener, reply: &'static str) -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.expect("accept");
        let (read_half, mut write_half) = socket.into_split();
        let mut lines = BufReader::new(read_half).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let wants_reply = CommandLine::parse(&line)
                .map(|c| c.name.contains(".get"))
                .unwrap_or(false);
            let _ = tx.send(line);
            if wants_reply {
                write_half.write_all(reply.as_bytes()).await.unwrap();
                write_half.write_all(b"\n").await.unwrap();
            }
        }
    });
    rx
}

async fn next_line(rx: &mut mpsc::UnboundedReceiver<String>) -> String {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout waiting for line")
        .expect("peer gone")
}

#[tokio::test]
async fn commands_arrive_intact_and_replies_come_back() {
    let (listener, endpoint) = listen().await;
    let mut seen = spawn_peer(listener, "12.5,64.0,-3.0");

    let mut ch = CommandChannel::connect(&endpoint).await.expect("connect");

    let input = args![Vec3::new(1, 2, 3), Arg::from(vec![4, 5]), "stone", 0.5];
    ch.send("world.setBlocks", &input).await.unwrap();

    let line = next_line(&mut seen).await;
    let parsed = CommandLine::parse(&line).unwrap();
    let expected: Vec<String> = flatten(&input).iter().map(|s| s.to_string()).collect();
    assert_eq!(parsed.name, "world.setBlocks");
    assert_eq!(parsed.args.len(), expected.len());
    assert_eq!(parsed.args, expected);

    let reply = tokio::time::timeout(
        Duration::from_secs(2),
        ch.send_receive("player.getPos", &args![]),
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(reply, "12.5,64.0,-3.0");
    assert_eq!(next_line(&mut seen).await, "player.getPos");
}

#[tokio::test]
async fn peer_closing_mid_line_fails_with_closed() {
    let (listener, endpoint) = listen().await;
    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = socket.into_split();
        let mut lines = BufReader::new(read_half).lines();
        let _ = lines.next_line().await;
        write_half.write_all(b"12,3").await.unwrap();
        // Both halves dropped here: FIN without a newline.
    });

    let mut ch = CommandChannel::connect(&endpoint).await.unwrap();
    let err = tokio::time::timeout(
        Duration::from_secs(2),
        ch.send_receive("player.getTile", &args![]),
    )
    .await
    .unwrap()
    .unwrap_err();
    assert!(matches!(err, ChannelError::Closed), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_fails_with_connect_error() {
    let (listener, endpoint) = listen().await;
    drop(listener);

    let err = match CommandChannel::connect(&endpoint).await {
        Ok(_) => panic!("connected to a closed port"),
        Err(e) => e,
    };
    match err {
        ChannelError::Connect { addr, .. } => assert_eq!(addr, endpoint.addr()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn wire_transcript_records_both_directions() {
    let (listener, mut endpoint) = listen().await;
    let _seen = spawn_peer(listener, "64");

    let path = std::env::temp_dir().join(format!(
        "mcpi-link-wire-{}-{}.log",
        std::process::id(),
        endpoint.port
    ));
    let _ = std::fs::remove_file(&path);
    endpoint.log_path = Some(path.to_string_lossy().into_owned());
    endpoint.debug = true;

    let mut ch = CommandChannel::connect(&endpoint).await.unwrap();
    ch.send("chat.post", &args!["hi"]).await.unwrap();
    let height = ch.send_receive("world.getHeight", &args![0, 0]).await.unwrap();
    assert_eq!(height, "64");
    ch.close().await.unwrap();

    let transcript = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        transcript,
        "> chat.post,hi\n> world.getHeight,0,0\n< 64\n"
    );
    let _ = std::fs::remove_file(&path);
}
