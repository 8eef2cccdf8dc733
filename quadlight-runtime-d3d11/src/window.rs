use crate::error::Result;
use quadlight_common::Size;
use std::ffi::CString;
use windows::core::{s, PCSTR};
use windows::Win32::Foundation::{
    GetLastError, ERROR_CLASS_ALREADY_EXISTS, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleA;
use windows::Win32::UI::Input::KeyboardAndMouse::VK_ESCAPE;
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRect, CreateWindowExA, DefWindowProcA, DestroyWindow, DispatchMessageA,
    LoadCursorW, PeekMessageA, PostQuitMessage, RegisterClassExA, ShowWindow, TranslateMessage,
    CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, IDC_ARROW, MSG, PM_REMOVE, SW_SHOW, WINDOW_EX_STYLE,
    WINDOW_STYLE, WM_DESTROY, WM_KEYDOWN, WM_QUIT, WNDCLASSEXA, WS_CAPTION, WS_MINIMIZEBOX,
    WS_OVERLAPPED, WS_SYSMENU,
};

const WINDOW_CLASS: PCSTR = s!("QuadlightWindowClass");
const STYLE: WINDOW_STYLE =
    WINDOW_STYLE(WS_OVERLAPPED.0 | WS_CAPTION.0 | WS_SYSMENU.0 | WS_MINIMIZEBOX.0);

/// Something that draws into a window from the message loop.
pub trait Sample {
    fn bind_to_window(&mut self, hwnd: HWND) -> Result<()>;

    fn update(&mut self) {}
    fn render(&mut self) -> Result<()>;

    /// Called once after the message loop exits.
    fn shutdown(&mut self) {}

    fn title(&self) -> &str;
    fn window_size(&self) -> Size<u32>;
}

/// Register the window class and create a window whose client area is `size`.
///
/// The window is not shown.
pub fn create_window(title: &str, size: Size<u32>) -> Result<HWND> {
    unsafe {
        let instance: HINSTANCE = GetModuleHandleA(None)?.into();

        let wc = WNDCLASSEXA {
            cbSize: std::mem::size_of::<WNDCLASSEXA>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: instance,
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: WINDOW_CLASS,
            ..Default::default()
        };

        if RegisterClassExA(&wc) == 0 {
            let error = GetLastError();
            if error != ERROR_CLASS_ALREADY_EXISTS {
                return Err(windows::core::Error::from(error.to_hresult()).into());
            }
            log::debug!("window class already registered");
        }

        let mut window_rect = RECT {
            left: 0,
            top: 0,
            right: size.width as i32,
            bottom: size.height as i32,
        };
        AdjustWindowRect(&mut window_rect, STYLE, false)?;

        let title = CString::new(title.replace('\0', "")).unwrap_or_default();
        let hwnd = CreateWindowExA(
            WINDOW_EX_STYLE::default(),
            WINDOW_CLASS,
            PCSTR(title.as_ptr().cast()),
            STYLE,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            window_rect.right - window_rect.left,
            window_rect.bottom - window_rect.top,
            None,
            None,
            instance,
            None,
        )?;

        log::debug!("created {}x{} window", size.width, size.height);
        Ok(hwnd)
    }
}

/// Open a window for `sample` and pump messages until it is closed.
///
/// The sample renders whenever the message queue is empty.
pub fn run_sample<S: Sample>(mut sample: S) -> Result<()> {
    let hwnd = create_window(sample.title(), sample.window_size())?;

    sample.bind_to_window(hwnd)?;
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
    }

    let mut message = MSG::default();
    let result = loop {
        if unsafe { PeekMessageA(&mut message, None, 0, 0, PM_REMOVE) }.as_bool() {
            if message.message == WM_QUIT {
                break Ok(());
            }
            unsafe {
                let _ = TranslateMessage(&message);
                DispatchMessageA(&message);
            }
        } else {
            sample.update();
            if let Err(error) = sample.render() {
                break Err(error);
            }
        }
    };

    sample.shutdown();
    result
}

extern "system" fn wndproc(window: HWND, message: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match message {
        WM_KEYDOWN if wparam.0 == VK_ESCAPE.0 as usize => {
            if let Err(error) = unsafe { DestroyWindow(window) } {
                log::warn!("failed to close window: {error}");
            }
            LRESULT::default()
        }
        WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            LRESULT::default()
        }
        _ => unsafe { DefWindowProcA(window, message, wparam, lparam) },
    }
}
